//! Fixed header text for both formats

use crate::core::VcfLayout;

/// Meta-information block of emitted VCF, without the column header line
pub const VCF_META_LINES: &[&str] = &[
    "##fileformat=VCFv4.1",
    "##source=VarScan2",
    "##INFO=<ID=AF,Number=A,Type=Float,Description=\"Allele Frequency\">",
    "##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Total depth of quality bases\">",
    "##INFO=<ID=SOMATIC,Number=0,Type=Flag,Description=\"Indicates if record is a somatic mutation\">",
    "##INFO=<ID=SS,Number=1,Type=String,Description=\"Somatic status of variant (0=Reference,1=Germline,2=Somatic,3=LOH, or 5=Unknown)\">",
    "##INFO=<ID=SSC,Number=1,Type=String,Description=\"Somatic score in Phred scale (0-255) derived from somatic p-value\">",
    "##INFO=<ID=GPV,Number=1,Type=Float,Description=\"Fisher's Exact Test P-value of tumor+normal versus no variant for Germline calls\">",
    "##INFO=<ID=SPV,Number=1,Type=Float,Description=\"Fisher's Exact Test P-value of tumor versus normal for Somatic/LOH calls\">",
    "##FILTER=<ID=str10,Description=\"Less than 10% or more than 90% of variant supporting reads on one strand\">",
    "##FILTER=<ID=indelError,Description=\"Likely artifact due to indel reads at this position\">",
    "##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">",
    "##FORMAT=<ID=GQ,Number=1,Type=Integer,Description=\"Genotype Quality\">",
    "##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Read Depth\">",
    "##FORMAT=<ID=RD,Number=1,Type=Integer,Description=\"Depth of reference-supporting bases (reads1)\">",
    "##FORMAT=<ID=AD,Number=1,Type=Integer,Description=\"Depth of variant-supporting bases (reads2)\">",
    "##FORMAT=<ID=FREQ,Number=1,Type=String,Description=\"Variant allele frequency\">",
    "##FORMAT=<ID=DP4,Number=1,Type=String,Description=\"Strand read counts: ref/fwd, ref/rev, var/fwd, var/rev\">",
];

/// Column header of a sites-only VCF
pub const VCF_SITES_COLUMNS: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO";

/// Column header of a VCF carrying the normal and tumor samples
pub const VCF_SAMPLE_COLUMNS: &str =
    "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNORMAL\tTUMOR";

/// Prefix that identifies VCF input
pub const VCF_FILEFORMAT_PREFIX: &str = "##fileformat=";

/// Native-format column names, in column order
pub const NATIVE_COLUMNS: [&str; 23] = [
    "chrom",
    "position",
    "ref",
    "var",
    "normal_reads1",
    "normal_reads2",
    "normal_var_freq",
    "normal_gt",
    "tumor_reads1",
    // VarScan's own header spells this column without the trailing 2
    "tumor_reads",
    "tumor_var_freq",
    "tumor_gt",
    "somatic_status",
    "variant_p_value",
    "somatic_p_value",
    "tumor_reads1_plus",
    "tumor_reads1_minus",
    "tumor_reads2_plus",
    "tumor_reads2_minus",
    "normal_reads1_plus",
    "normal_reads1_minus",
    "normal_reads2_plus",
    "normal_reads2_minus",
];

/// First column of the native header line
pub const NATIVE_HEADER_TOKEN: &str = "chrom";

/// Full VCF header block for the given layout, one entry per line
pub fn vcf_header_lines(layout: VcfLayout) -> Vec<&'static str> {
    let mut lines = VCF_META_LINES.to_vec();
    lines.push(match layout {
        VcfLayout::WithSamples => VCF_SAMPLE_COLUMNS,
        VcfLayout::SitesOnly => VCF_SITES_COLUMNS,
    });
    lines
}

/// The native header line
pub fn native_header_line() -> String {
    NATIVE_COLUMNS.join("\t")
}
