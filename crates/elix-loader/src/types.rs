//! Loader-specific error types.

use thiserror::Error;

/// Errors that can occur while loading a diagnosis map.
///
/// Any of these at process start is fatal for the scoring engine: an engine
/// is only constructed from a successfully loaded map.
#[derive(Error, Debug)]
pub enum MapError {
    /// I/O error reading a map file.
    #[error("IO error reading map file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A map entry names a group outside the published vocabulary.
    #[error("Unknown comorbidity group '{value}' at line {line}")]
    UnknownGroup {
        /// The unrecognized group tag.
        value: String,
        /// Line in the source file.
        line: u64,
    },

    /// A map entry carries an unusable diagnosis-code prefix.
    #[error("Invalid diagnosis-code prefix '{value}' (1-7 ASCII alphanumeric characters expected)")]
    InvalidPrefix {
        /// The rejected prefix.
        value: String,
    },

    /// The source contained no usable entries.
    #[error("Diagnosis map is empty")]
    EmptyMap,

    /// The publication text contains no `Value $RCOMFMT` block.
    #[error("No 'Value $RCOMFMT' block found in publication text")]
    MissingValueBlock,

    /// The `Value $RCOMFMT` block is not terminated by a ';' line.
    #[error("'Value $RCOMFMT' block is not terminated by ';'")]
    UnterminatedValueBlock,
}

/// Result type for map-loading operations.
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = MapError::UnknownGroup {
            value: "BOGUS".into(),
            line: 12,
        };
        assert_eq!(
            err.to_string(),
            "Unknown comorbidity group 'BOGUS' at line 12"
        );

        let err = MapError::InvalidPrefix {
            value: "I10.9000".into(),
        };
        assert!(err.to_string().contains("I10.9000"));
    }
}
