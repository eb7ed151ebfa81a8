//! varscan-vcf - VarScan2 native format <-> VCF conversion
//!
//! Converts VarScan2 somatic calls between the tool's tab-separated native
//! output and VCF 4.1. The input format is detected from the first line and
//! the opposite format is written.
//!
//! # Example
//!
//! ```
//! use varscan_vcf::{convert_reader, ConvertOptions};
//!
//! let native = "chr1\t100\tC\t+AT\t5\t10\t66.7%\t0/1\t3\t20\t87%\t0/1\tSomatic\t0.01\t0.0001\t2\t1\t6\t4\t3\t2\t5\t5\n";
//! let mut out = Vec::new();
//! let stats = convert_reader(native.as_bytes(), &mut out, &ConvertOptions::default()).unwrap();
//!
//! assert_eq!(stats.success, 1);
//! let vcf = String::from_utf8(out).unwrap();
//! assert!(vcf.contains("chr1\t100\t.\tC\tCAT\t.\tPASS\tAF=0.87;DP=38;SOMATIC;SS=2;SSC=40;"));
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use self::core::{
    CompatMode, ConvertOptions, ErrorPolicy, Genotype, RecordError, Result, SomaticScore,
    SomaticStatus, VarscanVcfError, VcfLayout,
};
pub use formats::{
    convert_file, convert_reader, ConversionStats, InputFormat, NativeToVcfConverter,
    RecordConverter, VcfToNativeConverter,
};
