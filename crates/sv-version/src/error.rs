use std::num::ParseIntError;

/// The kind of failure a [`VersionError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The version number could not be decoded into one to three
    /// non-negative integers.
    IllegalFormat,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::IllegalFormat => write!(f, "illegal version format"),
        }
    }
}

/// Ways a version string can fail to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Version number {number:?} has {count} parts, expected at most 3")]
    PartCount { number: String, count: usize },
    #[error("Invalid part {part:?} in version number")]
    InvalidPart {
        part: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Negative part {part} in version number")]
    NegativePart { part: i64 },
}

impl VersionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::PartCount { .. }
            | VersionError::InvalidPart { .. }
            | VersionError::NegativePart { .. } => ErrorKind::IllegalFormat,
        }
    }

    pub fn is_illegal_format(&self) -> bool {
        self.kind() == ErrorKind::IllegalFormat
    }
}
