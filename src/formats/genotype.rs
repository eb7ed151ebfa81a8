//! Per-sample genotype column
//!
//! Both samples are written as `GT:GQ:DP:RD:AD:FREQ:DP4`, where DP4 is itself a
//! comma-separated tuple of strand read counts.

use crate::core::{RecordError, RecordResult};
use std::fmt;

/// FORMAT keys of every emitted sample column
pub const SAMPLE_FORMAT: &str = "GT:GQ:DP:RD:AD:FREQ:DP4";

/// Number of colon-separated sub-fields in a sample column
pub const SAMPLE_FIELD_COUNT: usize = 7;

/// Which of the paired samples a column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Normal,
    Tumor,
}

impl Sample {
    fn column_name(self) -> &'static str {
        match self {
            Sample::Normal => "NORMAL sample column",
            Sample::Tumor => "TUMOR sample column",
        }
    }

    fn dp4_name(self) -> &'static str {
        match self {
            Sample::Normal => "NORMAL DP4",
            Sample::Tumor => "TUMOR DP4",
        }
    }
}

/// Strand-specific read counts (DP4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandCounts<'a> {
    pub ref_forward: &'a str,
    pub ref_reverse: &'a str,
    pub var_forward: &'a str,
    pub var_reverse: &'a str,
}

impl<'a> StrandCounts<'a> {
    /// Parse `rf,rr,vf,vr`
    pub fn parse(value: &'a str, sample: Sample) -> RecordResult<Self> {
        let mut parts = value.split(',');
        let mut next = || parts.next().ok_or_else(|| RecordError::missing(sample.dp4_name()));

        Ok(Self {
            ref_forward: next()?,
            ref_reverse: next()?,
            var_forward: next()?,
            var_reverse: next()?,
        })
    }
}

impl fmt::Display for StrandCounts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.ref_forward, self.ref_reverse, self.var_forward, self.var_reverse
        )
    }
}

/// One sample's genotype column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleColumn<'a> {
    pub genotype: &'a str,
    pub quality: &'a str,
    pub depth: &'a str,
    /// RD
    pub ref_reads: &'a str,
    /// AD
    pub var_reads: &'a str,
    pub var_freq: &'a str,
    pub strands: StrandCounts<'a>,
}

impl<'a> SampleColumn<'a> {
    /// Parse a column laid out as [`SAMPLE_FORMAT`]
    pub fn parse(value: &'a str, sample: Sample) -> RecordResult<Self> {
        let fields: Vec<&'a str> = value.split(':').collect();
        if fields.len() < SAMPLE_FIELD_COUNT {
            return Err(RecordError::missing(sample.column_name()));
        }

        Ok(Self {
            genotype: fields[0],
            quality: fields[1],
            depth: fields[2],
            ref_reads: fields[3],
            var_reads: fields[4],
            var_freq: fields[5],
            strands: StrandCounts::parse(fields[6], sample)?,
        })
    }
}

impl fmt::Display for SampleColumn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}",
            self.genotype,
            self.quality,
            self.depth,
            self.ref_reads,
            self.var_reads,
            self.var_freq,
            self.strands
        )
    }
}
