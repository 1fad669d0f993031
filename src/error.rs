//! Error types for hzip

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HzipError {
    #[error("empty input")]
    EmptyInput,

    #[error("input too large: {size} bytes exceeds configured maximum of {max}")]
    InputTooLarge { size: usize, max: usize },

    #[error("not an HZIP container: found magic {found:02x?}")]
    FormatMismatch { found: [u8; 4] },

    #[error("truncated container: need {expected} bytes, only {available} available")]
    TruncatedContainer { expected: usize, available: usize },

    #[error("corrupt tree data: {0}")]
    CorruptTree(String),

    #[error("invalid padding count {0}, must be 0-7")]
    InvalidPadding(u8),

    #[error("no code for byte 0x{0:02x}")]
    UnknownSymbol(u8),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
