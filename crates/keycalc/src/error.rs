//! Errors for the token-parsing surface
//!
//! Engine operations never fail; only turning outside text (operator
//! symbols, script tokens, digit values) into typed input can.

use thiserror::Error;

/// Result type for parsing calculator input
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced when converting raw input into typed calculator input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Character or string is not one of `+ - * / % ^`
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Token does not name any calculator action
    #[error("unknown action token: {0:?}")]
    UnknownAction(String),

    /// Digit value outside 0..=9
    #[error("digit out of range: {0}")]
    DigitOutOfRange(u8),
}
