use strum::IntoStaticStr;
use thiserror::Error;

use crate::birth_date::DateParseError;

impl From<IdCardError> for i64 {
    fn from(value: IdCardError) -> i64 {
        match value {
            IdCardError::AbsentInput => -1,
            IdCardError::StructuralMismatch => -2,
            IdCardError::UnknownRegion { .. } => -3,
            IdCardError::UnparseableDate(_) => -4,
            IdCardError::ChecksumMismatch { .. } => -5,
            IdCardError::NonDigitContent => -6,
        }
    }
}

/// Why an identifier was rejected. Only [check](crate::check) hands these out, every other
/// operation reports them as an absent or `false` result.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdCardError {
    #[error("No identifier was given")]
    AbsentInput,

    /// Wrong length, or characters that don't fit the 15 or 18 character layout
    #[error("Identifier must be 15 digits, or 17 digits followed by a digit or X")]
    StructuralMismatch,

    #[error("Unknown region code {code}")]
    UnknownRegion { code: String },

    #[error("Invalid birth date: {0}")]
    UnparseableDate(#[from] DateParseError),

    #[error("Check character is {actual}, expected {expected}")]
    ChecksumMismatch { expected: char, actual: char },

    #[error("Identifier contains non digit characters")]
    NonDigitContent,
}

impl IdCardError {
    /// Stable snake_case name of the rejection, used as a metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("Century pivot must be between 0 and 100, got {0}")]
    InvalidCenturyPivot(u8),
}
