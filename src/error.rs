// src/error.rs
use std::fmt;
use thiserror::Error;

/// Why a format string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The format string ended where a type code was expected (e.g. `"2"`)
    MissingTypeCode,
    /// A character other than `b`, `s`, `i` or `l` sat where a type code was expected
    UnknownTypeCode(char),
    /// An explicit repeat count of zero
    ZeroCount,
    /// A repeat count, or the total encoded width, does not fit the target integer
    CountOverflow,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingTypeCode => write!(f, "expected a type code, found end of format"),
            MalformedReason::UnknownTypeCode(c) => write!(f, "unknown type code {:?}", c),
            MalformedReason::ZeroCount => write!(f, "repeat count must be at least 1"),
            MalformedReason::CountOverflow => write!(f, "repeat count too large"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetconvError {
    #[error("Malformed format at position {position}: {reason}")]
    MalformedFormat { position: usize, reason: MalformedReason },

    #[error("Buffer too short: field at offset {offset} needs {needed} bytes, buffer holds {available}")]
    BufferTooShort { offset: usize, needed: usize, available: usize },
}

impl NetconvError {
    pub(crate) fn malformed(position: usize, reason: MalformedReason) -> Self {
        NetconvError::MalformedFormat { position, reason }
    }

    /// True for errors caused by the format string itself
    pub fn is_malformed_format(&self) -> bool {
        matches!(self, NetconvError::MalformedFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, NetconvError>;
