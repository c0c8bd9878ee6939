//! Keyboard contract: key names to actions
//!
//! Key names follow the browser `KeyboardEvent.key` spelling (`"Enter"`,
//! `"Escape"`, `"Backspace"`, `"7"`, `"+"`). Keys outside the contract map
//! to nothing; shells decide what, if anything, to do with them.

use crate::action::Action;
use crate::operator::Operator;

/// Maps a key name to the action it triggers
#[must_use]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => Some(Action::Equals),
        "Escape" => Some(Action::Clear),
        "Backspace" => Some(Action::Backspace),
        "." => Some(Action::Decimal),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            action_for_char(c)
        }
    }
}

/// Maps a single typed character to its action
///
/// Only digits, `+ - * /`, `=` and `.` are part of the keyboard contract.
#[must_use]
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| Action::Digit(d as u8)),
        '+' | '-' | '*' | '/' => Operator::try_from(c).ok().map(Action::Operator),
        '=' => Some(Action::Equals),
        '.' => Some(Action::Decimal),
        _ => None,
    }
}
