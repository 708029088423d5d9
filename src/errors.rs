//! Error types for annotation loading, feature queries and effect
//! prediction.

use thiserror::Error;

/// Result type alias for gffsnp operations
pub type Result<T> = std::result::Result<T, GffError>;

/// Error type for gffsnp operations
#[derive(Error, Debug)]
pub enum GffError {
    /// A GFF line could not be parsed; aborts the whole load.
    #[error("Malformed GFF record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input, 0 when parsed standalone
        line:   usize,
        /// What was wrong with the record
        reason: String,
    },

    /// A query referenced an `ID` that is not present in the index
    #[error("ID {0} not found in GFF!")]
    FeatureNotFound(String),

    /// Coding-sequence assembly was given an unusable feature set
    #[error("Cannot assemble coding sequence: {0}")]
    Assembly(String),

    /// A variant refers to a sequence missing from the reference
    #[error("Sequence {0} not found in reference")]
    UnknownSequence(String),

    /// The reference contains two records with the same identifier
    #[error("Duplicate sequence {0} in reference")]
    DuplicateSequence(String),

    /// A variant line could not be parsed
    #[error("Malformed variant record at line {line}: {reason}")]
    MalformedVariant {
        /// 1-based line number in the input
        line:   usize,
        /// What was wrong with the record
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while writing tabular output
    #[error("Output error: {0}")]
    Output(#[from] csv::Error),
}

impl GffError {
    /// Re-labels a standalone record error with its position in a file.
    pub(crate) fn at_line(
        self,
        line_no: usize,
    ) -> Self {
        match self {
            GffError::MalformedRecord { reason, .. } => {
                GffError::MalformedRecord {
                    line: line_no,
                    reason,
                }
            },
            other => other,
        }
    }
}
