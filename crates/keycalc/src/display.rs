//! Display fields read by shells after every operation
//!
//! The expression line is never stored: it is rendered from the pending
//! operator state and the last resolved computation, so it cannot drift
//! from the fields it describes.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// What a shell shows after an engine operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Display {
    /// Main line: the operand being typed or the last result
    pub current: String,
    /// Secondary line above the main one, e.g. `"5 +"` or `"5 + 3 ="`
    pub expression: String,
}

/// A computation resolved by equals, kept for the expression line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) lhs: String,
    pub(crate) operator: Operator,
    pub(crate) rhs: String,
}

/// Renders the expression line
///
/// A pending operator wins over a past resolution.
pub(crate) fn render_expression(
    previous: &str,
    pending: Option<Operator>,
    resolution: Option<&Resolution>,
) -> String {
    match (pending, resolution) {
        (Some(op), _) => format!("{previous} {op}"),
        (None, Some(r)) => format!("{} {} {} =", r.lhs, r.operator, r.rhs),
        (None, None) => String::new(),
    }
}
