use thiserror::Error;

/// Errors produced by label parsing and mutation.
///
/// Line numbers are 1-based and count every line in the buffer, blank lines
/// included.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("line {line}: missing '=' separator")]
    MissingSeparator { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: embedded NUL byte")]
    EmbeddedNul { line: usize },

    #[error("line {line}: duplicate key {key:?}")]
    DuplicateKey { key: String, line: usize },

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

pub type Result<T> = std::result::Result<T, LabelError>;
