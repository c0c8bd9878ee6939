//! Interactive terminal shell
//!
//! Polls for terminal events with a timeout equal to the animation tick.
//! A timeout advances the bubbles; a key press or a left click on a
//! keypad button or the theme switch dispatches one command.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use keycalc::{Action, ButtonDef, Display, Engine, Keypad};

use crate::bubbles::Bubbles;
use crate::config::ShellConfig;
use crate::error::{CliError, CliResult};
use crate::input::{InputHandler, ShellCommand};
use crate::render::{button_under, display_lines, keypad_width, layout};
use crate::theme::Theme;

const TITLE_ROW: u16 = 0;
const BUBBLE_ROW: u16 = 1;
const BUBBLE_ROWS: usize = 2;
const DISPLAY_ROW: u16 = 3;
const KEYPAD_ROW: u16 = 6;
const MARGIN: u16 = 2;
const TITLE: &str = "keycalc";
const HELP: &str = "click or type  t theme  r √  p %  ^ pow  m/M M±  R MR  c MC  q quit";

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Shell state: one engine plus presentation
#[derive(Debug)]
pub struct Shell {
    engine: Engine,
    keypad: Keypad,
    theme: Theme,
    bubbles: Bubbles,
    animate: bool,
    last_action: Option<Action>,
    should_quit: bool,
}

impl Shell {
    /// Creates a shell with a fresh engine
    #[must_use]
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::standard(),
            theme: config.theme,
            bubbles: Bubbles::new(),
            animate: config.animate,
            last_action: None,
            should_quit: false,
        }
    }

    /// Applies one command
    pub fn handle(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::Engine(action) => {
                self.engine.apply(action);
                self.last_action = Some(action);
            }
            ShellCommand::CycleTheme => {
                self.theme = self.theme.next();
                tracing::debug!(theme = self.theme.name(), "theme changed");
            }
            ShellCommand::Quit => self.should_quit = true,
            ShellCommand::None => {}
        }
    }

    /// Applies one terminal event
    ///
    /// Key presses go through `input`; left-button presses are hit-tested
    /// against the drawn frame. Everything else is ignored.
    pub fn handle_event(&mut self, event: &Event, input: &InputHandler) {
        let command = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => input.handle_key(*key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.click(*column, *row),
            _ => ShellCommand::None,
        };
        self.handle(command);
    }

    /// Command for a click at terminal cell (`column`, `row`)
    #[must_use]
    pub fn click(&self, column: u16, row: u16) -> ShellCommand {
        if row == TITLE_ROW {
            let (start, label) = self.theme_switch();
            let end = start + to_u16(label.chars().count());
            return if (start..end).contains(&column) {
                ShellCommand::CycleTheme
            } else {
                ShellCommand::None
            };
        }

        let (Some(x), Some(y)) = (column.checked_sub(MARGIN), row.checked_sub(KEYPAD_ROW)) else {
            return ShellCommand::None;
        };
        button_under(&self.keypad, usize::from(x), usize::from(y))
            .map_or(ShellCommand::None, |button| ShellCommand::Engine(button.action))
    }

    /// Column and text of the theme switch, right-aligned on the title row
    fn theme_switch(&self) -> (u16, String) {
        let label = format!("[theme: {}]", self.theme.name());
        let width = keypad_width(&self.keypad);
        let start = width.saturating_sub(label.chars().count());
        (MARGIN + to_u16(start), label)
    }

    /// Advances the bubble animation when enabled
    pub fn tick(&mut self) {
        if self.animate {
            self.bubbles.tick();
        }
    }

    /// Current display fields
    #[must_use]
    pub fn display(&self) -> Display {
        self.engine.display()
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Animation state
    #[must_use]
    pub fn bubbles(&self) -> &Bubbles {
        &self.bubbles
    }

    /// Last action sent to the engine, highlighted on the keypad
    #[must_use]
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Keypad button of the last action, if it has one
    #[must_use]
    pub fn pressed_button(&self) -> Option<&ButtonDef> {
        self.last_action
            .and_then(|action| self.keypad.find_by_action(action))
    }

    /// Returns whether the shell should exit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Queues one full frame on `out` and flushes it
    pub fn draw<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let palette = self.theme.palette();
        let width = keypad_width(&self.keypad);
        let (switch_col, switch_label) = self.theme_switch();

        queue!(
            out,
            SetBackgroundColor(palette.background),
            Clear(ClearType::All),
            SetForegroundColor(palette.text),
            MoveTo(MARGIN, TITLE_ROW),
            Print(TITLE),
            MoveTo(switch_col, TITLE_ROW),
            SetBackgroundColor(palette.special),
            Print(switch_label),
            SetBackgroundColor(palette.background),
        )?;

        if self.animate {
            for (row, line) in (BUBBLE_ROW..).zip(self.bubbles.field(width, BUBBLE_ROWS)) {
                queue!(out, MoveTo(MARGIN, row), Print(line))?;
            }
        }

        let lines = display_lines(&self.engine.display(), self.engine.has_memory(), width);
        queue!(out, SetBackgroundColor(palette.display))?;
        for (row, line) in (DISPLAY_ROW..).zip(lines) {
            queue!(out, MoveTo(MARGIN, row), Print(line))?;
        }

        let pressed = self.pressed_button();
        for cell in layout(&self.keypad) {
            queue!(
                out,
                MoveTo(MARGIN + to_u16(cell.x), KEYPAD_ROW + to_u16(cell.y)),
                SetBackgroundColor(palette.button(cell.kind)),
            )?;
            if pressed.is_some_and(|button| button.row == cell.y && button.action == cell.action) {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(out, Print(&cell.text), SetAttribute(Attribute::Reset))?;
            queue!(out, SetForegroundColor(palette.text))?;
        }

        let (rows, _) = self.keypad.dimensions();
        queue!(
            out,
            SetBackgroundColor(palette.background),
            MoveTo(MARGIN, KEYPAD_ROW + to_u16(rows) + 1),
            Print(HELP),
            ResetColor,
        )?;
        out.flush()?;
        Ok(())
    }
}

/// Runs the shell until the user quits
///
/// The terminal is restored even when the event loop fails; the loop's
/// error wins over a restore error.
pub fn run(config: &ShellConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)
        .map_err(CliError::from)
        .and_then(|()| {
            tracing::info!(theme = config.theme.name(), tick_ms = config.tick_ms, "shell started");
            event_loop(&mut stdout, config)
        });

    let restored = restore(&mut stdout);
    tracing::info!("shell stopped");
    result.and(restored)
}

/// Leaves raw mode and the alternate screen, attempting both steps
fn restore<W: Write>(out: &mut W) -> CliResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, ResetColor, Show, DisableMouseCapture, LeaveAlternateScreen);
    raw.and(screen).map_err(CliError::from)
}

fn event_loop<W: Write>(out: &mut W, config: &ShellConfig) -> CliResult<()> {
    let mut shell = Shell::new(config);
    let input_handler = InputHandler::new();

    while !shell.should_quit() {
        shell.draw(out)?;

        if event::poll(config.tick())? {
            shell.handle_event(&event::read()?, &input_handler);
        } else {
            shell.tick();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CELL_WIDTH, GAP};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use keycalc::Operator;

    fn shell() -> Shell {
        Shell::new(&ShellConfig::new())
    }

    fn press(shell: &mut Shell, actions: &[Action]) {
        for action in actions {
            shell.handle(ShellCommand::Engine(*action));
        }
    }

    #[test]
    fn test_new_shell() {
        let shell = shell();
        assert_eq!(shell.display().current, "0");
        assert_eq!(shell.theme(), Theme::Blue);
        assert!(!shell.should_quit());
        assert!(shell.last_action().is_none());
    }

    #[test]
    fn test_engine_commands() {
        let mut shell = shell();
        press(
            &mut shell,
            &[
                Action::Digit(5),
                Action::Operator(Operator::Add),
                Action::Digit(3),
            ],
        );
        assert_eq!(shell.display().expression, "5 +");
        assert_eq!(shell.last_action(), Some(Action::Digit(3)));
        press(&mut shell, &[Action::Equals]);
        assert_eq!(shell.display().current, "8");
    }

    #[test]
    fn test_cycle_theme_and_quit() {
        let mut shell = shell();
        shell.handle(ShellCommand::CycleTheme);
        assert_eq!(shell.theme(), Theme::Purple);
        shell.handle(ShellCommand::None);
        assert!(!shell.should_quit());
        shell.handle(ShellCommand::Quit);
        assert!(shell.should_quit());
    }

    #[test]
    fn test_tick_respects_animate() {
        let mut animated = shell();
        animated.tick();
        assert_eq!(animated.bubbles().current_tick(), 1);

        let mut still = Shell::new(&ShellConfig::new().with_animate(false));
        still.tick();
        assert_eq!(still.bubbles().current_tick(), 0);
    }

    #[test]
    fn test_draw_frame() {
        let mut shell = shell();
        press(&mut shell, &[Action::Digit(4), Action::Digit(2)]);
        let mut frame = Vec::new();
        shell.draw(&mut frame).unwrap();
        let text = String::from_utf8(frame).unwrap();
        assert!(text.contains(TITLE));
        assert!(text.contains("[theme: blue]"));
        assert!(text.contains("[ 7 ]"));
        assert!(text.contains("x^y"));
        assert!(text.contains("42"));
        assert!(text.contains(HELP));
    }

    // ===== Mouse =====

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_on_digit_cell() {
        let shell = shell();
        // "[ 7 ]" is the first cell of keypad row 2
        assert_eq!(
            shell.click(MARGIN + 2, KEYPAD_ROW + 2),
            ShellCommand::Engine(Action::Digit(7))
        );
        assert_eq!(
            shell.click(MARGIN, KEYPAD_ROW + 2),
            ShellCommand::Engine(Action::Digit(7))
        );
    }

    #[test]
    fn test_click_on_memory_and_spanning_buttons() {
        let shell = shell();
        assert_eq!(
            shell.click(MARGIN, KEYPAD_ROW),
            ShellCommand::Engine(Action::MemoryClear)
        );
        assert_eq!(
            shell.click(MARGIN + 20, KEYPAD_ROW + 6),
            ShellCommand::Engine(Action::Power)
        );
    }

    #[test]
    fn test_click_outside_buttons() {
        let shell = shell();
        assert_eq!(shell.click(0, KEYPAD_ROW + 2), ShellCommand::None);
        assert_eq!(shell.click(MARGIN + 5, KEYPAD_ROW + 2), ShellCommand::None);
        assert_eq!(shell.click(MARGIN + 2, DISPLAY_ROW), ShellCommand::None);
        assert_eq!(shell.click(MARGIN + 2, KEYPAD_ROW + 7), ShellCommand::None);
        assert_eq!(shell.click(MARGIN, TITLE_ROW), ShellCommand::None);
    }

    #[test]
    fn test_click_on_theme_switch() {
        let shell = shell();
        let (start, label) = shell.theme_switch();
        assert_eq!(label, "[theme: blue]");
        assert_eq!(shell.click(start, TITLE_ROW), ShellCommand::CycleTheme);
        let last = start + to_u16(label.chars().count()) - 1;
        assert_eq!(shell.click(last, TITLE_ROW), ShellCommand::CycleTheme);
        assert_eq!(shell.click(last + 1, TITLE_ROW), ShellCommand::None);
    }

    #[test]
    fn test_mouse_session() {
        let mut shell = shell();
        let input = InputHandler::new();
        let cell = |action: Action| {
            let button = Keypad::standard().find_by_action(action).cloned().unwrap();
            (
                MARGIN + to_u16(button.col * (CELL_WIDTH + GAP)) + 1,
                KEYPAD_ROW + to_u16(button.row),
            )
        };
        for action in [
            Action::Digit(9),
            Action::Operator(Operator::Multiply),
            Action::Digit(9),
            Action::Equals,
            Action::MemoryAdd,
        ] {
            let (column, row) = cell(action);
            shell.handle_event(&left_click(column, row), &input);
        }
        assert_eq!(shell.display().current, "81");
        assert_eq!(shell.pressed_button().map(|b| b.action), Some(Action::MemoryAdd));

        let (start, _) = shell.theme_switch();
        shell.handle_event(&left_click(start, TITLE_ROW), &input);
        assert_eq!(shell.theme(), Theme::Purple);
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut shell = shell();
        let input = InputHandler::new();
        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: MARGIN + 2,
            row: KEYPAD_ROW + 2,
            modifiers: KeyModifiers::NONE,
        });
        shell.handle_event(&right, &input);
        shell.handle_event(&Event::FocusGained, &input);
        assert_eq!(shell.display().current, "0");
        assert!(shell.last_action().is_none());
    }

    #[test]
    fn test_key_events_dispatch() {
        let mut shell = shell();
        let input = InputHandler::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        shell.handle_event(&key(KeyCode::Char('7')), &input);
        shell.handle_event(&key(KeyCode::Char('t')), &input);
        assert_eq!(shell.display().current, "7");
        assert_eq!(shell.theme(), Theme::Purple);

        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('8'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        shell.handle_event(&release, &input);
        assert_eq!(shell.display().current, "7");
    }

    // ===== Terminal restore =====

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[?25h"), "cursor shown");
        assert!(text.contains("\u{1b}[?1049l"), "alternate screen left");
    }
}
