//! Keyboard input handling for the terminal shell
//!
//! Keys covered by the calculator's keyboard contract go straight to the
//! engine. A few extra letters reach the functions that only have
//! on-screen buttons in a browser.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keycalc::keymap::action_for_key;
use keycalc::Action;

/// What a key press asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forward an action to the engine
    Engine(Action),
    /// Switch to the next color theme
    CycleTheme,
    /// Leave the shell
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to shell commands
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a command
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> ShellCommand {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => ShellCommand::Quit,
                _ => ShellCommand::None,
            };
        }

        let key_name = match code {
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Char(c) => c.to_string(),
            _ => return ShellCommand::None,
        };
        if let Some(action) = action_for_key(&key_name) {
            return ShellCommand::Engine(action);
        }

        match code {
            KeyCode::Char(c) => Self::shortcut(c),
            _ => ShellCommand::None,
        }
    }

    /// Letter shortcuts outside the keyboard contract
    fn shortcut(c: char) -> ShellCommand {
        let action = match c {
            't' => return ShellCommand::CycleTheme,
            'q' => return ShellCommand::Quit,
            'r' => Action::SquareRoot,
            'p' => Action::Percentage,
            '^' => Action::Power,
            'm' => Action::MemoryAdd,
            'M' => Action::MemorySubtract,
            'R' => Action::MemoryRecall,
            'c' => Action::MemoryClear,
            _ => return ShellCommand::None,
        };
        ShellCommand::Engine(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Keyboard contract =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                ShellCommand::Engine(Action::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let expected = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in expected {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                ShellCommand::Engine(Action::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_enter_and_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            ShellCommand::Engine(Action::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            ShellCommand::Engine(Action::Equals)
        );
    }

    #[test]
    fn test_handle_escape_backspace_decimal() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            ShellCommand::Engine(Action::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            ShellCommand::Engine(Action::Backspace)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            ShellCommand::Engine(Action::Decimal)
        );
    }

    // ===== Shortcuts =====

    #[test]
    fn test_shell_shortcuts() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('t'))),
            ShellCommand::CycleTheme
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            ShellCommand::Quit
        );
    }

    #[test]
    fn test_function_shortcuts() {
        let handler = InputHandler::new();
        let expected = [
            ('r', Action::SquareRoot),
            ('p', Action::Percentage),
            ('^', Action::Power),
            ('m', Action::MemoryAdd),
            ('M', Action::MemorySubtract),
            ('R', Action::MemoryRecall),
            ('c', Action::MemoryClear),
        ];
        for (c, action) in expected {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                ShellCommand::Engine(action)
            );
        }
    }

    #[test]
    fn test_ctrl_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            ShellCommand::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            ShellCommand::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            ShellCommand::None
        );
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), ShellCommand::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(5))), ShellCommand::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('z'))),
            ShellCommand::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            ShellCommand::None
        );
    }
}
