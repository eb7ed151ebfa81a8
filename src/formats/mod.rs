//! File format adapters
//!
//! Adapters for the VarScan2 native somatic format and VCF, plus the stream
//! driver that picks a direction from the input.

pub mod convert;
pub mod detect;
pub mod genotype;
pub mod header;
pub mod native;
pub mod vcf;

pub use convert::{convert_file, convert_reader, ConversionStats, RecordConverter};
pub use detect::InputFormat;
pub use genotype::{Sample, SampleColumn, StrandCounts, SAMPLE_FORMAT};
pub use native::{normalize_alt, NativeRecordView, NativeToVcfConverter};
pub use vcf::{InfoField, VcfRecordView, VcfToNativeConverter};

use memchr::memchr_iter;

/// Split a line on tabs
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(24);
    let mut start = 0;
    for tab in memchr_iter(b'\t', line.as_bytes()) {
        fields.push(&line[start..tab]);
        start = tab + 1;
    }
    fields.push(&line[start..]);
    fields
}
