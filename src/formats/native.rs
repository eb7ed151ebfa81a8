//! VarScan2 native format adapter
//!
//! Parses the 23-column native somatic output and converts each record to
//! one VCF line.

use super::convert::RecordConverter;
use super::genotype::{SampleColumn, StrandCounts, SAMPLE_FORMAT};
use super::header::{vcf_header_lines, NATIVE_COLUMNS, NATIVE_HEADER_TOKEN};
use super::split_fields;
use crate::core::{
    format_float, parse_count, parse_percent, CompatMode, ConvertOptions, Genotype, RecordError,
    RecordResult, SomaticScore, SomaticStatus, VcfLayout,
};

/// Read counts and call for one sample of a native record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeSample<'a> {
    pub reads1: &'a str,
    pub reads2: &'a str,
    pub var_freq: &'a str,
    pub genotype: &'a str,
}

/// Zero-copy view over one native data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeRecordView<'a> {
    pub chrom: &'a str,
    pub position: &'a str,
    pub ref_allele: &'a str,
    pub var_allele: &'a str,
    pub normal: NativeSample<'a>,
    pub tumor: NativeSample<'a>,
    pub somatic_status: &'a str,
    pub variant_p_value: &'a str,
    pub somatic_p_value: &'a str,
    pub tumor_strands: StrandCounts<'a>,
    pub normal_strands: StrandCounts<'a>,
}

impl<'a> NativeRecordView<'a> {
    /// Split a native line into its named columns
    pub fn parse(line: &'a str) -> RecordResult<Self> {
        let f = split_fields(line);
        if f.len() < NATIVE_COLUMNS.len() {
            return Err(RecordError::missing(NATIVE_COLUMNS[f.len()]));
        }

        Ok(Self {
            chrom: f[0],
            position: f[1],
            ref_allele: f[2],
            var_allele: f[3],
            normal: NativeSample {
                reads1: f[4],
                reads2: f[5],
                var_freq: f[6],
                genotype: f[7],
            },
            tumor: NativeSample {
                reads1: f[8],
                reads2: f[9],
                var_freq: f[10],
                genotype: f[11],
            },
            somatic_status: f[12],
            variant_p_value: f[13],
            somatic_p_value: f[14],
            tumor_strands: StrandCounts {
                ref_forward: f[15],
                ref_reverse: f[16],
                var_forward: f[17],
                var_reverse: f[18],
            },
            normal_strands: StrandCounts {
                ref_forward: f[19],
                ref_reverse: f[20],
                var_forward: f[21],
                var_reverse: f[22],
            },
        })
    }

    /// Whether a line is the native column header
    pub fn is_header_line(line: &str) -> bool {
        line.split('\t').next() == Some(NATIVE_HEADER_TOKEN)
    }
}

/// Depth of one sample after numeric validation
struct SampleDepth {
    total: i64,
}

impl SampleDepth {
    fn parse(
        sample: &NativeSample<'_>,
        reads1: &'static str,
        reads2: &'static str,
    ) -> RecordResult<Self> {
        let reads1 = parse_count(reads1, sample.reads1)?;
        let reads2 = parse_count(reads2, sample.reads2)?;
        Ok(Self {
            total: add_depth(reads1, reads2)?,
        })
    }
}

/// Sum two read counts; an overflow names both addends
fn add_depth(a: i64, b: i64) -> RecordResult<i64> {
    a.checked_add(b).ok_or_else(|| RecordError::ParseError {
        field: "DP",
        value: format!("{} + {}", a, b),
    })
}

/// Convert VarScan indel notation into a VCF ALT allele.
///
/// `+AT` becomes the reference followed by the inserted bases. For `-AT`,
/// strict mode keeps the legacy output (the variant string without its `-`);
/// improved mode uses the reference with a trailing copy of the deleted bases
/// excised, or the reference itself when it does not end with them.
pub fn normalize_alt(ref_allele: &str, var_allele: &str, compat: CompatMode) -> String {
    if let Some(inserted) = var_allele.strip_prefix('+') {
        let mut alt = String::with_capacity(ref_allele.len() + inserted.len());
        alt.push_str(ref_allele);
        alt.push_str(&inserted.replace('+', ""));
        return alt;
    }

    if var_allele.starts_with('-') {
        return match compat {
            CompatMode::Strict => var_allele.replace('-', ""),
            CompatMode::Improved => {
                let deleted = var_allele.trim_start_matches('-');
                ref_allele
                    .strip_suffix(deleted)
                    .filter(|kept| !kept.is_empty() && !deleted.is_empty())
                    .unwrap_or(ref_allele)
                    .to_string()
            }
        };
    }

    var_allele.to_string()
}

/// NativeToVcfConverter: one native record in, one VCF record out
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeToVcfConverter {
    compat: CompatMode,
    layout: VcfLayout,
}

impl NativeToVcfConverter {
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            compat: options.compat,
            layout: options.layout,
        }
    }

    /// Build the VCF line for a parsed record
    pub fn convert_record(&self, record: &NativeRecordView<'_>) -> RecordResult<String> {
        let normal_depth = SampleDepth::parse(&record.normal, "normal_reads1", "normal_reads2")?;
        let tumor_depth = SampleDepth::parse(&record.tumor, "tumor_reads1", "tumor_reads2")?;
        let total_depth = add_depth(normal_depth.total, tumor_depth.total)?;

        let status = SomaticStatus::from_native(record.somatic_status)?;

        let score = SomaticScore::from_p_value(record.somatic_p_value, self.compat);
        if score.is_fallback() {
            log::debug!(
                "{}:{} somatic p-value '{}' has no Phred score, using SSC=0",
                record.chrom,
                record.position,
                record.somatic_p_value
            );
        }

        let tumor_freq = parse_percent("tumor_var_freq", record.tumor.var_freq)?;
        let normal_freq = parse_percent("normal_var_freq", record.normal.var_freq)?;
        let allele_freq = tumor_freq / 100.0;

        let mut info = String::with_capacity(128);
        info.push_str("AF=");
        info.push_str(&format_float(allele_freq));
        info.push_str(";DP=");
        info.push_str(&total_depth.to_string());
        if status.is_somatic() {
            info.push_str(";SOMATIC");
        }
        info.push_str(";SS=");
        info.push_str(status.code());
        info.push_str(";SSC=");
        info.push_str(&score.value().to_string());
        info.push_str(";GPV=");
        info.push_str(record.variant_p_value);
        info.push_str(";SPV=");
        info.push_str(record.somatic_p_value);

        let alt = normalize_alt(record.ref_allele, record.var_allele, self.compat);

        let mut output = String::with_capacity(256);
        for field in [
            record.chrom,
            record.position,
            ".",
            record.ref_allele,
            alt.as_str(),
            ".",
            "PASS",
        ] {
            output.push_str(field);
            output.push('\t');
        }
        output.push_str(&info);

        if self.layout == VcfLayout::WithSamples {
            let normal_dp = normal_depth.total.to_string();
            let tumor_dp = tumor_depth.total.to_string();

            let normal = SampleColumn {
                genotype: Genotype::from_frequency(normal_freq).as_str(),
                quality: ".",
                depth: &normal_dp,
                ref_reads: record.normal.reads1,
                var_reads: record.normal.reads2,
                var_freq: record.normal.var_freq,
                strands: record.normal_strands,
            };
            let tumor = SampleColumn {
                genotype: Genotype::from_frequency(tumor_freq).as_str(),
                quality: ".",
                depth: &tumor_dp,
                ref_reads: record.tumor.reads1,
                var_reads: record.tumor.reads2,
                var_freq: record.tumor.var_freq,
                strands: self.tumor_strands(record),
            };

            output.push('\t');
            output.push_str(SAMPLE_FORMAT);
            output.push('\t');
            output.push_str(&normal.to_string());
            output.push('\t');
            output.push_str(&tumor.to_string());
        }

        Ok(output)
    }

    /// Tumor DP4. Strict mode repeats the legacy column choice, which takes
    /// var-reverse from `normal_reads1_plus`.
    fn tumor_strands<'a>(&self, record: &NativeRecordView<'a>) -> StrandCounts<'a> {
        match self.compat {
            CompatMode::Improved => record.tumor_strands,
            CompatMode::Strict => StrandCounts {
                var_reverse: record.normal_strands.ref_forward,
                ..record.tumor_strands
            },
        }
    }
}

impl RecordConverter for NativeToVcfConverter {
    fn header_lines(&self) -> Vec<String> {
        vcf_header_lines(self.layout)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn is_header(&self, line: &str) -> bool {
        NativeRecordView::is_header_line(line)
    }

    fn convert(&self, line: &str) -> RecordResult<String> {
        let record = NativeRecordView::parse(line)?;
        self.convert_record(&record)
    }
}
