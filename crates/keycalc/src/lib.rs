//! keycalc - button-driven calculator engine
//!
//! The engine turns button presses and key strokes into a running
//! calculation. Evaluation is strictly sequential: entering a second
//! operator resolves the first, so there is no precedence and no
//! parenthesis handling.
//!
//! - [`Engine`]: the input state machine and memory register
//! - [`Action`]: one user intent, dispatched with [`Engine::apply`]
//! - [`keymap`]: keyboard key names to actions
//! - [`Keypad`]: the on-screen button grid
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for key in ["2", "+", "3", "*", "4", "Enter"] {
//!     if let Some(action) = action_for_key(key) {
//!         engine.apply(action);
//!     }
//! }
//! assert_eq!(engine.current_operand(), "20");
//! assert_eq!(engine.display_expression(), "5 * 4 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod action;
mod display;
pub mod engine;
mod error;
pub mod keymap;
pub mod keypad;
pub mod number;
pub mod operator;

pub use action::Action;
pub use display::Display;
pub use engine::Engine;
pub use error::{ParseError, ParseResult};
pub use keypad::{ButtonDef, ButtonKind, Keypad};
pub use operator::Operator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::display::Display;
    pub use crate::engine::Engine;
    pub use crate::error::{ParseError, ParseResult};
    pub use crate::keymap::{action_for_char, action_for_key};
    pub use crate::keypad::{ButtonDef, ButtonKind, Keypad};
    pub use crate::number::{format_number, parse_operand};
    pub use crate::operator::Operator;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.apply(Action::Digit(6));
        engine.apply(Action::Operator(Operator::Divide));
        engine.apply(Action::Digit(0));
        assert_eq!(engine.apply(Action::Equals).current, "Infinity");
    }

    #[test]
    fn test_keyboard_session() {
        let mut engine = Engine::new();
        for key in ["1", "2", ".", "5", "Backspace", "-", "2", "=", "Escape"] {
            engine.apply(action_for_key(key).unwrap());
        }
        let display = engine.display();
        assert_eq!(display.current, "0");
        assert!(display.expression.is_empty());
    }

    #[test]
    fn test_keypad_drives_engine() {
        let keypad = Keypad::standard();
        let mut engine = Engine::new();
        for label in ["9", "x^y", "2", "=", "M+", "√", "MR"] {
            let button = keypad.buttons().iter().find(|b| b.label() == label).unwrap();
            engine.apply(button.action);
        }
        assert_eq!(engine.current_operand(), "81");
        assert_eq!(engine.memory(), 81.0);
    }
}
