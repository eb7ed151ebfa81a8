//! VCF format adapter
//!
//! Parses the paired normal/tumor VCF written by VarScan2 and converts each
//! record back to one native line.

use super::convert::RecordConverter;
use super::genotype::{Sample, SampleColumn};
use super::header::native_header_line;
use super::split_fields;
use crate::core::{RecordError, RecordResult, SomaticStatus};

/// VCF column names, used when reporting a short line
const VCF_COLUMNS: [&str; 11] = [
    "CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT", "NORMAL", "TUMOR",
];

/// Parsed INFO column
///
/// Entries keep their input order. Bare flags such as `SOMATIC` are kept apart
/// and never returned by [`InfoField::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoField<'a> {
    entries: Vec<(&'a str, &'a str)>,
    flags: Vec<&'a str>,
}

impl<'a> InfoField<'a> {
    /// Split on `;`, then each entry on its first `=`
    pub fn parse(info: &'a str) -> Self {
        let mut field = Self::default();
        if info == "." {
            return field;
        }

        for item in info.split(';').filter(|item| !item.is_empty()) {
            match item.split_once('=') {
                Some((key, value)) => field.entries.push((key, value)),
                None => field.flags.push(item),
            }
        }
        field
    }

    /// Value of a key; the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Value of a key that must be present
    pub fn require(&self, key: &'static str) -> RecordResult<&'a str> {
        self.get(key).ok_or_else(|| RecordError::missing(key))
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| *f == flag)
    }
}

/// Zero-copy view over one VCF data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfRecordView<'a> {
    pub chrom: &'a str,
    pub pos: &'a str,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
    pub info: InfoField<'a>,
    pub normal: SampleColumn<'a>,
    pub tumor: SampleColumn<'a>,
}

impl<'a> VcfRecordView<'a> {
    /// Parse a VCF line carrying NORMAL and TUMOR sample columns
    pub fn parse(line: &'a str) -> RecordResult<Self> {
        let fields = split_fields(line);
        if fields.len() < VCF_COLUMNS.len() {
            return Err(RecordError::missing(VCF_COLUMNS[fields.len()]));
        }

        Ok(Self {
            chrom: fields[0],
            pos: fields[1],
            ref_allele: fields[3],
            alt_allele: fields[4],
            info: InfoField::parse(fields[7]),
            normal: SampleColumn::parse(fields[9], Sample::Normal)?,
            tumor: SampleColumn::parse(fields[10], Sample::Tumor)?,
        })
    }

    /// Whether a line is a meta-information or column header line
    pub fn is_header_line(line: &str) -> bool {
        line.starts_with('#')
    }
}

/// VcfToNativeConverter: one VCF record in, one native record out
#[derive(Debug, Clone, Copy, Default)]
pub struct VcfToNativeConverter;

impl VcfToNativeConverter {
    pub fn new() -> Self {
        Self
    }

    /// Build the native line for a parsed record.
    ///
    /// The line ends with a tab, as VarScan's converter has always written it.
    pub fn convert_record(&self, record: &VcfRecordView<'_>) -> RecordResult<String> {
        let status = SomaticStatus::from_code(record.info.require("SS")?)?;
        let variant_p_value = record.info.require("GPV")?;
        let somatic_p_value = record.info.require("SPV")?;

        let normal = &record.normal;
        let tumor = &record.tumor;

        let columns = [
            record.chrom,
            record.pos,
            record.ref_allele,
            record.alt_allele,
            normal.ref_reads,
            normal.var_reads,
            normal.var_freq,
            normal.genotype,
            tumor.ref_reads,
            tumor.var_reads,
            tumor.var_freq,
            tumor.genotype,
            status.label(),
            variant_p_value,
            somatic_p_value,
            tumor.strands.ref_forward,
            tumor.strands.ref_reverse,
            tumor.strands.var_forward,
            tumor.strands.var_reverse,
            normal.strands.ref_forward,
            normal.strands.ref_reverse,
            normal.strands.var_forward,
            normal.strands.var_reverse,
        ];

        let mut output = String::with_capacity(256);
        for column in columns {
            output.push_str(column);
            output.push('\t');
        }
        Ok(output)
    }
}

impl RecordConverter for VcfToNativeConverter {
    fn header_lines(&self) -> Vec<String> {
        vec![native_header_line()]
    }

    fn is_header(&self, line: &str) -> bool {
        VcfRecordView::is_header_line(line)
    }

    fn convert(&self, line: &str) -> RecordResult<String> {
        let record = VcfRecordView::parse(line)?;
        self.convert_record(&record)
    }
}
