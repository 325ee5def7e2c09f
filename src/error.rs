//! Error types.

use thiserror::Error;

/// Failure to parse a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexParseError {
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
