//! Input format detection

use super::header::VCF_FILEFORMAT_PREFIX;
use std::fmt;

/// Format of an input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// VarScan2 native tab-separated output
    Native,
    /// VCF
    Vcf,
}

impl InputFormat {
    /// Decide the format from the first non-empty line.
    ///
    /// Surrounding whitespace is ignored. Anything without the `##fileformat=`
    /// prefix is native.
    pub fn detect(first_line: &str) -> Self {
        if first_line.trim().starts_with(VCF_FILEFORMAT_PREFIX) {
            InputFormat::Vcf
        } else {
            InputFormat::Native
        }
    }

    /// Format written when converting from this one
    pub fn target(self) -> Self {
        match self {
            InputFormat::Native => InputFormat::Vcf,
            InputFormat::Vcf => InputFormat::Native,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Native => f.write_str("native"),
            InputFormat::Vcf => f.write_str("VCF"),
        }
    }
}
