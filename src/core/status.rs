//! Somatic status classification
//!
//! VarScan2 writes the status as a label in its native output and as a numeric
//! code in the `SS` INFO key. The two forms map 1:1.

use super::error::{RecordError, RecordResult};
use std::fmt;

/// Somatic status of a variant call relative to the matched normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SomaticStatus {
    Reference,
    Germline,
    Somatic,
    Loh,
    Unknown,
}

impl SomaticStatus {
    /// All statuses in code order
    pub const ALL: [SomaticStatus; 5] = [
        SomaticStatus::Reference,
        SomaticStatus::Germline,
        SomaticStatus::Somatic,
        SomaticStatus::Loh,
        SomaticStatus::Unknown,
    ];

    /// Look up a status from its `SS` code
    pub fn from_code(code: &str) -> RecordResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| RecordError::UnmappedKey {
                kind: "somatic status code",
                key: code.to_string(),
            })
    }

    /// Look up a status from its native-format label
    pub fn from_label(label: &str) -> RecordResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| RecordError::UnmappedKey {
                kind: "somatic status label",
                key: label.to_string(),
            })
    }

    /// Parse the native `somatic_status` column.
    ///
    /// Accepts the label, or the numeric code as some VarScan builds emit it.
    pub fn from_native(value: &str) -> RecordResult<Self> {
        Self::from_label(value).or_else(|err| Self::from_code(value).map_err(|_| err))
    }

    /// Numeric code written to `SS`
    pub fn code(self) -> &'static str {
        match self {
            SomaticStatus::Reference => "0",
            SomaticStatus::Germline => "1",
            SomaticStatus::Somatic => "2",
            SomaticStatus::Loh => "3",
            SomaticStatus::Unknown => "5",
        }
    }

    /// Label written to the native `somatic_status` column
    pub fn label(self) -> &'static str {
        match self {
            SomaticStatus::Reference => "Reference",
            SomaticStatus::Germline => "Germline",
            SomaticStatus::Somatic => "Somatic",
            SomaticStatus::Loh => "LOH",
            SomaticStatus::Unknown => "Unknown",
        }
    }

    pub fn is_somatic(self) -> bool {
        self == SomaticStatus::Somatic
    }
}

impl fmt::Display for SomaticStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
