//! Numeric helpers shared by both conversion directions
//!
//! Percentage parsing, genotype calls from variant frequency, the Phred-scaled
//! somatic score and float rendering for INFO values.

use super::error::{RecordError, RecordResult};
use super::options::CompatMode;
use std::fmt;

/// Lower frequency bound (exclusive) of a heterozygous call
pub const HET_MIN_FREQ: f64 = 10.0;

/// Upper frequency bound (exclusive) of a heterozygous call
pub const HET_MAX_FREQ: f64 = 75.0;

/// Parse a VarScan percentage such as `66.7%` or `66,7%` into its numeric value
///
/// The value stays on the 0-100 scale.
pub fn parse_percent(field: &'static str, value: &str) -> RecordResult<f64> {
    let normalized = value.replace('%', "").replace(',', ".");
    normalized
        .trim()
        .parse::<f64>()
        .map_err(|_| RecordError::parse(field, value))
}

/// Parse a read count column
///
/// Signed, as VarScan's tooling reads it; only non-numeric text is rejected.
pub fn parse_count(field: &'static str, value: &str) -> RecordResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordError::parse(field, value))
}

/// Diploid genotype call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genotype {
    HomRef,
    Het,
    HomAlt,
}

impl Genotype {
    /// Call a genotype from a variant frequency in percent.
    ///
    /// Both 10 and 75 fall into the homozygous-reference bucket.
    pub fn from_frequency(freq: f64) -> Self {
        if freq > HET_MIN_FREQ && freq < HET_MAX_FREQ {
            Genotype::Het
        } else if freq > HET_MAX_FREQ {
            Genotype::HomAlt
        } else {
            Genotype::HomRef
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Genotype::HomRef => "0/0",
            Genotype::Het => "0/1",
            Genotype::HomAlt => "1/1",
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the somatic score computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SomaticScore {
    /// `-10 * log10(p)` converted to an integer
    Phred(i64),
    /// p-value was zero, negative or unparseable; scored as 0
    Fallback,
}

impl SomaticScore {
    /// Compute SSC from the raw somatic p-value column.
    ///
    /// Strict mode truncates toward zero, improved mode rounds to nearest.
    pub fn from_p_value(p_value: &str, compat: CompatMode) -> Self {
        let p = match p_value.trim().parse::<f64>() {
            Ok(p) if p > 0.0 => p,
            _ => return SomaticScore::Fallback,
        };

        let score = -10.0 * p.log10();
        if !score.is_finite() {
            return SomaticScore::Fallback;
        }

        let score = match compat {
            CompatMode::Strict => score.trunc(),
            CompatMode::Improved => score.round(),
        };
        SomaticScore::Phred(score as i64)
    }

    pub fn value(self) -> i64 {
        match self {
            SomaticScore::Phred(score) => score,
            SomaticScore::Fallback => 0,
        }
    }

    pub fn is_fallback(self) -> bool {
        self == SomaticScore::Fallback
    }
}

/// Render a float the way VarScan's tooling prints it: shortest round-trip
/// digits, always with a fractional part, scientific below 1e-4 or from 1e16.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exp: i32 = exponent.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => formatted,
        };
    }

    let mut formatted = value.to_string();
    if !formatted.contains('.') {
        formatted.push_str(".0");
    }
    formatted
}
