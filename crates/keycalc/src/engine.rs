//! Calculator engine: the input state machine
//!
//! The engine is always in one of three implicit states:
//!
//! - **Idle** (no pending operator): digits extend the operand.
//! - **OperatorPending** (operator set, awaiting operand): the next digit
//!   starts the right-hand operand.
//! - **Resolved** (after equals, awaiting operand, no operator): the next
//!   digit starts a fresh calculation.
//!
//! Evaluation is strictly left to right. Entering an operator while a
//! complete `lhs op rhs` is pending resolves it first, so `2 + 3 * 4 =`
//! yields 20.
//!
//! No operation fails. Division by zero, roots of negatives and malformed
//! operand text surface as `Infinity`/`NaN` in the display.

use std::mem;

use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::display::{render_expression, Display, Resolution};
use crate::number::{format_number, parse_operand};
use crate::operator::Operator;

const ZERO: &str = "0";

/// Running state of one calculator
#[derive(Debug, Clone)]
pub struct Engine {
    /// Operand being typed, or the last result
    current: String,
    /// Left-hand operand captured when the pending operator was entered
    previous: String,
    /// Operator waiting for its right-hand operand
    pending: Option<Operator>,
    /// Next digit starts a new operand instead of extending this one
    awaiting_operand: bool,
    /// Memory register, survives `clear`
    memory: f64,
    /// Last computation resolved by equals
    resolution: Option<Resolution>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine showing `0` with empty memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: ZERO.to_string(),
            previous: String::new(),
            pending: None,
            awaiting_operand: false,
            memory: 0.0,
            resolution: None,
        }
    }

    /// Dispatches one action to the matching operation
    pub fn apply(&mut self, action: Action) -> Display {
        match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::Decimal => self.enter_decimal(),
            Action::Operator(op) => self.enter_operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::Percentage => self.percentage(),
            Action::SquareRoot => self.square_root(),
            Action::Power => self.power(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryClear => self.memory_clear(),
        }
    }

    // ===== Operand entry =====

    /// Enters one digit
    ///
    /// Starts a new operand when awaiting one; otherwise appends, with a
    /// lone `0` replaced rather than prefixed. Values above 9 are ignored.
    pub fn enter_digit(&mut self, digit: u8) -> Display {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "ignoring out-of-range digit");
            return self.display();
        };

        if self.awaiting_operand {
            self.current = c.to_string();
            self.awaiting_operand = false;
        } else if self.current == ZERO {
            self.current = c.to_string();
        } else {
            self.current.push(c);
        }
        self.display_after("enter_digit")
    }

    /// Enters the decimal point, at most once per operand
    pub fn enter_decimal(&mut self) -> Display {
        if self.awaiting_operand {
            self.current = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
        self.display_after("enter_decimal")
    }

    /// Drops the last character; a single digit (or `-d`) becomes `0`
    pub fn backspace(&mut self) -> Display {
        let len = self.current.chars().count();
        if len <= 1 || (len == 2 && self.current.starts_with('-')) {
            self.current = ZERO.to_string();
        } else {
            self.current.pop();
        }
        self.display_after("backspace")
    }

    // ===== Operators =====

    /// Enters a binary operator, resolving a complete pending computation
    /// first
    pub fn enter_operator(&mut self, operator: Operator) -> Display {
        if self.pending.is_some() && !self.awaiting_operand {
            trace!(%operator, "resolving pending computation before chaining");
            self.resolve();
        }

        self.previous.clone_from(&self.current);
        self.pending = Some(operator);
        self.awaiting_operand = true;
        self.resolution = None;
        self.display_after("enter_operator")
    }

    /// Starts an exponentiation, same as entering `^`
    pub fn power(&mut self) -> Display {
        self.enter_operator(Operator::Power)
    }

    /// Resolves the pending computation
    ///
    /// Does nothing without a pending operator or before its right-hand
    /// operand has been typed.
    pub fn equals(&mut self) -> Display {
        if !self.resolve() {
            trace!("equals without a complete computation");
        }
        self.display_after("equals")
    }

    /// Applies the pending operator; returns false when there is nothing
    /// to resolve
    fn resolve(&mut self) -> bool {
        let Some(operator) = self.pending else {
            return false;
        };
        if self.awaiting_operand {
            return false;
        }

        let lhs = parse_operand(&self.previous);
        let rhs = parse_operand(&self.current);
        let result = format_number(operator.apply(lhs, rhs));

        let rhs_text = mem::replace(&mut self.current, result);
        self.resolution = Some(Resolution {
            lhs: self.previous.clone(),
            operator,
            rhs: rhs_text,
        });
        self.pending = None;
        self.awaiting_operand = true;
        true
    }

    /// Resets the calculation; memory is kept
    pub fn clear(&mut self) -> Display {
        self.current = ZERO.to_string();
        self.previous.clear();
        self.pending = None;
        self.awaiting_operand = false;
        self.resolution = None;
        self.display_after("clear")
    }

    // ===== Unary functions =====

    /// Divides the operand by 100
    pub fn percentage(&mut self) -> Display {
        self.current = format_number(parse_operand(&self.current) / 100.0);
        self.display_after("percentage")
    }

    /// Replaces the operand with its square root (NaN for negatives)
    pub fn square_root(&mut self) -> Display {
        self.current = format_number(parse_operand(&self.current).sqrt());
        self.display_after("square_root")
    }

    // ===== Memory register =====

    /// Adds the operand to memory
    pub fn memory_add(&mut self) -> Display {
        self.memory += parse_operand(&self.current);
        self.display_after("memory_add")
    }

    /// Subtracts the operand from memory
    pub fn memory_subtract(&mut self) -> Display {
        self.memory -= parse_operand(&self.current);
        self.display_after("memory_subtract")
    }

    /// Loads memory into the operand
    pub fn memory_recall(&mut self) -> Display {
        self.current = format_number(self.memory);
        self.display_after("memory_recall")
    }

    /// Resets memory to zero
    pub fn memory_clear(&mut self) -> Display {
        self.memory = 0.0;
        self.display_after("memory_clear")
    }

    // ===== Accessors =====

    /// Operand being typed, or the last result
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Left-hand operand of the pending operator (empty after clear)
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Operator waiting for its right-hand operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// True when the next digit starts a new operand
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Memory register value
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// True when memory holds anything but zero
    #[must_use]
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    /// Expression line shown above the operand
    #[must_use]
    pub fn display_expression(&self) -> String {
        render_expression(&self.previous, self.pending, self.resolution.as_ref())
    }

    /// Both display fields
    #[must_use]
    pub fn display(&self) -> Display {
        Display {
            current: self.current.clone(),
            expression: self.display_expression(),
        }
    }

    fn display_after(&self, operation: &'static str) -> Display {
        let shown = self.display();
        debug!(
            operation,
            current = %shown.current,
            expression = %shown.expression,
            "engine updated"
        );
        shown
    }
}
