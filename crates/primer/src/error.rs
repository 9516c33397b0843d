//! Error types raised by the lessons.

use std::io;
use thiserror::Error;

/// The one intentional fault in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivideError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Failures reported by [`crate::scan::Scanner`].
///
/// Every variant leaves the unfilled targets at whatever value they held
/// before the call, so callers that ignore the error see zero values.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unexpected newline")]
    UnexpectedNewline,

    #[error("expected newline")]
    ExpectedNewline,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("input does not match format: expected {expected:?}, found {found:?}")]
    Mismatch { expected: char, found: char },

    #[error("expected {kind}, found {token:?}")]
    InvalidToken { kind: &'static str, token: String },

    #[error("bad verb '%{0}'")]
    BadVerb(char),

    #[error("too few targets for format")]
    TooFewTargets,

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}
