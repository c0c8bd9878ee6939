//! On-screen keypad layout
//!
//! Layout (4 columns, the last button spans the full row):
//! ```text
//! [MC] [MR] [M+] [M-]
//! [C ] [⌫ ] [% ] [÷ ]
//! [7 ] [8 ] [9 ] [× ]
//! [4 ] [5 ] [6 ] [− ]
//! [1 ] [2 ] [3 ] [+ ]
//! [√ ] [0 ] [. ] [= ]
//! [        x^y        ]
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::operator::Operator;

/// Visual category of a button, used by shells to pick colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Number,
    /// Binary operators
    Operator,
    /// The equals button
    Equal,
    /// Clear and backspace
    Clear,
    /// Memory register buttons
    Memory,
    /// Percentage, square root and power
    Special,
}

impl ButtonKind {
    /// Category of the button that triggers `action`
    #[must_use]
    pub const fn of(action: Action) -> Self {
        match action {
            Action::Digit(_) | Action::Decimal => Self::Number,
            Action::Operator(_) => Self::Operator,
            Action::Equals => Self::Equal,
            Action::Clear | Action::Backspace => Self::Clear,
            Action::MemoryAdd
            | Action::MemorySubtract
            | Action::MemoryRecall
            | Action::MemoryClear => Self::Memory,
            Action::Percentage | Action::SquareRoot | Action::Power => Self::Special,
        }
    }
}

/// One button on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDef {
    /// Action triggered when the button is pressed
    pub action: Action,
    /// Color category
    pub kind: ButtonKind,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl ButtonDef {
    /// Creates a single-column button
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: Action, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            kind: ButtonKind::of(action),
            row,
            col,
            span,
        }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// True when the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<ButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Number of grid columns
    pub const COLUMNS: usize = 4;

    /// Creates the standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        use Action::{
            Backspace, Clear, Decimal, Digit, Equals, MemoryAdd, MemoryClear, MemoryRecall,
            MemorySubtract, Percentage, Power, SquareRoot,
        };
        let op = Action::Operator;

        let grid: [[Action; 4]; 6] = [
            [MemoryClear, MemoryRecall, MemoryAdd, MemorySubtract],
            [Clear, Backspace, Percentage, op(Operator::Divide)],
            [Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
            [Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
            [Digit(1), Digit(2), Digit(3), op(Operator::Add)],
            [SquareRoot, Digit(0), Decimal, Equals],
        ];

        let mut buttons: Vec<ButtonDef> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| ButtonDef::new(*action, row, col))
            })
            .collect();
        buttons.push(ButtonDef::spanning(Power, grid.len(), 0, Self::COLUMNS));

        Self {
            buttons,
            cols: Self::COLUMNS,
            rows: grid.len() + 1,
        }
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Buttons grouped by row
    pub fn rows(&self) -> impl Iterator<Item = Vec<&ButtonDef>> + '_ {
        (0..self.rows).map(move |row| self.buttons.iter().filter(|b| b.row == row).collect())
    }

    /// Button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button that triggers `action`
    #[must_use]
    pub fn find_by_action(&self, action: Action) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }
}
