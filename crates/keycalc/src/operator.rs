//! Binary operators and their arithmetic
//!
//! Arithmetic is plain IEEE-754: division by zero, overflow and invalid
//! powers come back as infinities or NaN instead of errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A binary operator that can be pending between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Floating-point remainder (%)
    Remainder,
    /// Exponentiation (^)
    Power,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
        Self::Power,
    ];

    /// ASCII symbol used in the display expression
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
            Self::Power => '^',
        }
    }

    /// Label printed on the keypad button
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
            Self::Power => "x^y",
        }
    }

    /// Applies the operator to `lhs` and `rhs`
    ///
    /// `Remainder` keeps the sign of `lhs`, like C `fmod`.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == c)
            .ok_or_else(|| ParseError::UnknownOperator(c.to_string()))
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseError::UnknownOperator(s.to_string())),
        }
    }
}
