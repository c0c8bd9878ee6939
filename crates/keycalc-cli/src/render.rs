//! Text layout for the keypad and display panel
//!
//! Everything here is pure string building. The interactive shell adds
//! colors on top; the `keypad` command prints the lines as they are.

use keycalc::{Action, ButtonDef, ButtonKind, Display, Keypad};

/// Width of a single-column button cell, brackets included
pub const CELL_WIDTH: usize = 5;
/// Columns between adjacent cells
pub const GAP: usize = 1;

/// A button positioned on the character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonCell {
    /// Column offset from the keypad origin
    pub x: usize,
    /// Row offset from the keypad origin
    pub y: usize,
    /// Cell text, exactly `width` characters
    pub text: String,
    /// Action the button triggers
    pub action: Action,
    /// Color category
    pub kind: ButtonKind,
}

impl ButtonCell {
    /// Cell width in characters
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Width in characters of a button spanning `span` columns
#[must_use]
pub const fn span_width(span: usize) -> usize {
    span * CELL_WIDTH + span.saturating_sub(1) * GAP
}

/// Total keypad width in characters
#[must_use]
pub fn keypad_width(keypad: &Keypad) -> usize {
    let (_, cols) = keypad.dimensions();
    span_width(cols)
}

/// Bracketed, centered button text, e.g. `"[ 7 ]"`
#[must_use]
pub fn button_text(label: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let len = label.chars().count();
    if len >= inner {
        let clipped: String = label.chars().take(inner).collect();
        return format!("[{clipped}]");
    }
    let left = (inner - len) / 2;
    let right = inner - len - left;
    format!("[{}{label}{}]", " ".repeat(left), " ".repeat(right))
}

/// Places every keypad button on the character grid
#[must_use]
pub fn layout(keypad: &Keypad) -> Vec<ButtonCell> {
    keypad
        .rows()
        .flatten()
        .map(|button| ButtonCell {
            x: button.col * (CELL_WIDTH + GAP),
            y: button.row,
            text: button_text(&button.label(), span_width(button.span)),
            action: button.action,
            kind: button.kind,
        })
        .collect()
}

/// Button under character offset (`x`, `y`) from the keypad origin
///
/// Gaps between cells hit nothing, except inside a spanning button.
#[must_use]
pub fn button_under(keypad: &Keypad, x: usize, y: usize) -> Option<&ButtonDef> {
    let pitch = CELL_WIDTH + GAP;
    let col = x / pitch;
    let button = keypad.button_at(y, col)?;
    if x % pitch >= CELL_WIDTH && !button.covers(y, col + 1) {
        return None;
    }
    Some(button)
}

/// One line of text per keypad row
#[must_use]
pub fn keypad_lines(keypad: &Keypad) -> Vec<String> {
    let width = keypad_width(keypad);
    let (rows, _) = keypad.dimensions();
    let mut lines = vec![vec![' '; width]; rows];
    for cell in layout(keypad) {
        if let Some(line) = lines.get_mut(cell.y) {
            for (offset, ch) in cell.text.chars().enumerate() {
                if let Some(slot) = line.get_mut(cell.x + offset) {
                    *slot = ch;
                }
            }
        }
    }
    lines
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Right-aligns `text` in `width` columns, keeping its rightmost
/// characters when it does not fit
#[must_use]
pub fn align_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{}{text}", " ".repeat(width - len))
    }
}

/// The two display lines: expression on top, operand below
///
/// An `M` in the first column of the operand line marks a non-zero
/// memory register.
#[must_use]
pub fn display_lines(display: &Display, has_memory: bool, width: usize) -> [String; 2] {
    let expression = align_right(&display.expression, width);
    let indicator = if has_memory { "M" } else { " " };
    let current = align_right(&display.current, width.saturating_sub(1));
    [expression, format!("{indicator}{current}")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc::Operator;

    #[test]
    fn test_span_width() {
        assert_eq!(span_width(1), 5);
        assert_eq!(span_width(4), 23);
        assert_eq!(span_width(0), 0);
    }

    #[test]
    fn test_button_text_centered() {
        assert_eq!(button_text("7", 5), "[ 7 ]");
        assert_eq!(button_text("MC", 5), "[MC ]");
        assert_eq!(button_text("x^y", 5), "[x^y]");
        assert_eq!(button_text("x^y", 23).chars().count(), 23);
        assert_eq!(button_text("÷", 5), "[ ÷ ]");
    }

    #[test]
    fn test_button_text_clips_long_labels() {
        assert_eq!(button_text("toolong", 5), "[too]");
    }

    #[test]
    fn test_layout_positions() {
        let keypad = Keypad::standard();
        let cells = layout(&keypad);
        assert_eq!(cells.len(), keypad.buttons().len());

        let seven = cells
            .iter()
            .find(|c| c.action == Action::Digit(7))
            .unwrap();
        assert_eq!((seven.x, seven.y), (0, 2));

        let divide = cells
            .iter()
            .find(|c| c.action == Action::Operator(Operator::Divide))
            .unwrap();
        assert_eq!((divide.x, divide.y), (18, 1));
        assert_eq!(divide.kind, ButtonKind::Operator);

        let power = cells.iter().find(|c| c.action == Action::Power).unwrap();
        assert_eq!(power.width(), keypad_width(&keypad));
    }

    #[test]
    fn test_button_under() {
        let keypad = Keypad::standard();
        let hit = |x, y| button_under(&keypad, x, y).map(|b| b.action);
        assert_eq!(hit(0, 2), Some(Action::Digit(7)));
        assert_eq!(hit(4, 2), Some(Action::Digit(7)));
        assert_eq!(hit(6, 2), Some(Action::Digit(8)));
        assert_eq!(hit(20, 5), Some(Action::Equals));
        assert_eq!(hit(5, 2), None);
        assert_eq!(hit(5, 6), Some(Action::Power));
        assert_eq!(hit(22, 6), Some(Action::Power));
        assert_eq!(hit(23, 0), None);
        assert_eq!(hit(24, 0), None);
        assert_eq!(hit(0, 7), None);
    }

    #[test]
    fn test_button_under_matches_layout() {
        let keypad = Keypad::standard();
        for cell in layout(&keypad) {
            for dx in 0..cell.width() {
                let button = button_under(&keypad, cell.x + dx, cell.y).unwrap();
                assert_eq!(button.action, cell.action);
            }
        }
    }

    #[test]
    fn test_keypad_lines() {
        let lines = keypad_lines(&Keypad::standard());
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "[MC ] [MR ] [M+ ] [M- ]");
        assert_eq!(lines[2], "[ 7 ] [ 8 ] [ 9 ] [ × ]");
        assert_eq!(lines[5], "[ √ ] [ 0 ] [ . ] [ = ]");
        assert!(lines[6].contains("x^y"));
        assert_eq!(lines[6].chars().count(), 23);
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("42", 5), "   42");
        assert_eq!(align_right("123456", 4), "3456");
        assert_eq!(align_right("", 2), "  ");
    }

    #[test]
    fn test_display_lines() {
        let display = Display {
            current: "8".into(),
            expression: "5 + 3 =".into(),
        };
        let [expr, current] = display_lines(&display, false, 10);
        assert_eq!(expr, "   5 + 3 =");
        assert_eq!(current, "         8");

        let [_, current] = display_lines(&display, true, 10);
        assert_eq!(current, "M        8");
    }
}
