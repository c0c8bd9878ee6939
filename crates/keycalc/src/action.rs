//! The vocabulary of user intents the engine understands
//!
//! One `Action` is one button press or one mapped key. Shells translate
//! whatever input they receive into actions and hand them to
//! [`Engine::apply`](crate::Engine::apply).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::operator::Operator;

/// A single calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Enter a binary operator
    Operator(Operator),
    /// Resolve the pending operator
    Equals,
    /// Reset the calculation (memory survives)
    Clear,
    /// Drop the last character of the operand
    Backspace,
    /// Divide the operand by 100
    Percentage,
    /// Replace the operand with its square root
    SquareRoot,
    /// Start an exponentiation
    Power,
    /// Add the operand to memory
    MemoryAdd,
    /// Subtract the operand from memory
    MemorySubtract,
    /// Load memory into the operand
    MemoryRecall,
    /// Reset memory to zero
    MemoryClear,
}

impl Action {
    /// Creates a digit action, rejecting values above 9
    pub fn digit(d: u8) -> ParseResult<Self> {
        if d <= 9 {
            Ok(Self::Digit(d))
        } else {
            Err(ParseError::DigitOutOfRange(d))
        }
    }

    /// Label shown on the keypad for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Percentage => "%".to_string(),
            Self::SquareRoot => "√".to_string(),
            Self::Power => "x^y".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
            Self::MemoryRecall => "MR".to_string(),
            Self::MemoryClear => "MC".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses keypad labels and the ASCII aliases used in scripts
///
/// Note that `%` is the percentage button, as on the keypad; the
/// remainder operator is spelled `mod`.
impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let [b] = token.as_bytes() {
            if b.is_ascii_digit() {
                return Ok(Self::Digit(b - b'0'));
            }
        }

        let action = match token {
            "." | "," => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "×" | "x" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "⌫" => Self::Backspace,
            "%" => Self::Percentage,
            "√" => Self::SquareRoot,
            "^" => Self::Power,
            "M+" | "m+" => Self::MemoryAdd,
            "M-" | "m-" => Self::MemorySubtract,
            _ => match token.to_ascii_lowercase().as_str() {
                "mod" => Self::Operator(Operator::Remainder),
                "x^y" | "pow" => Self::Power,
                "c" | "ac" | "esc" | "escape" => Self::Clear,
                "bs" | "backspace" => Self::Backspace,
                "enter" => Self::Equals,
                "pct" => Self::Percentage,
                "sqrt" => Self::SquareRoot,
                "mr" => Self::MemoryRecall,
                "mc" => Self::MemoryClear,
                _ => return Err(ParseError::UnknownAction(token.to_string())),
            },
        };
        Ok(action)
    }
}
