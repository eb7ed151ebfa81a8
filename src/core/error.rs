//! Error types for varscan-vcf
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for varscan-vcf operations
#[derive(Debug, Error)]
pub enum VarscanVcfError {
    /// A record could not be converted
    #[error("line {line}: {source}")]
    Record {
        /// 1-based input line number
        line: usize,
        #[source]
        source: RecordError,
    },

    /// A line could not be decoded as UTF-8 text
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based input line number
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VarscanVcfError {
    /// Line number of the offending record, if the error came from one
    pub fn line(&self) -> Option<usize> {
        match self {
            VarscanVcfError::Record { line, .. } | VarscanVcfError::Decode { line, .. } => {
                Some(*line)
            }
            VarscanVcfError::Io(_) => None,
        }
    }
}

/// Errors that can occur while converting a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Required column, sub-field or INFO key is absent
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// Somatic status code or label outside the fixed set
    #[error("unmapped {kind} '{key}'")]
    UnmappedKey { kind: &'static str, key: String },

    /// Numeric field failed to parse
    #[error("failed to parse {field} '{value}'")]
    ParseError { field: &'static str, value: String },
}

impl RecordError {
    pub(crate) fn missing(field: &'static str) -> Self {
        RecordError::MissingField { field }
    }

    pub(crate) fn parse(field: &'static str, value: &str) -> Self {
        RecordError::ParseError {
            field,
            value: value.to_string(),
        }
    }

    /// Name of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            RecordError::MissingField { field } => field,
            RecordError::UnmappedKey { kind, .. } => kind,
            RecordError::ParseError { field, .. } => field,
        }
    }
}

/// Result type alias for varscan-vcf operations
pub type Result<T> = std::result::Result<T, VarscanVcfError>;

/// Result type alias for single-record conversion
pub type RecordResult<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display_includes_line() {
        let err = VarscanVcfError::Record {
            line: 7,
            source: RecordError::missing("SPV"),
        };
        assert_eq!(err.to_string(), "line 7: missing field: SPV");
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_unmapped_key_display() {
        let err = RecordError::UnmappedKey {
            kind: "somatic status code",
            key: "4".to_string(),
        };
        assert_eq!(err.to_string(), "unmapped somatic status code '4'");
        assert_eq!(err.field(), "somatic status code");
    }

    #[test]
    fn test_decode_error_has_line() {
        let err = VarscanVcfError::Decode {
            line: 3,
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.to_string(), "line 3: bad utf-8");
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err = VarscanVcfError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.line(), None);
    }
}
