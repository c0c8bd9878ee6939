//! Color themes
//!
//! Three themes cycle in a fixed order. Each maps every button category,
//! plus the display and background, to a terminal color.

use clap::ValueEnum;
use crossterm::style::Color;
use keycalc::ButtonKind;
use serde::{Deserialize, Serialize};

/// Available color themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Blue and indigo
    #[default]
    Blue,
    /// Purple and pink
    Purple,
    /// Grays and slates
    Dark,
}

/// Colors used to draw one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background
    pub background: Color,
    /// Display panel background
    pub display: Color,
    /// Text drawn on buttons and the display
    pub text: Color,
    /// Digit and decimal buttons
    pub number: Color,
    /// Operator buttons
    pub operator: Color,
    /// Equals button
    pub equal: Color,
    /// Clear and backspace buttons
    pub clear: Color,
    /// Memory buttons
    pub memory: Color,
    /// Percentage, square root and power buttons
    pub special: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

const SLATE_800: Color = rgb(0x1e_29_3b);
const WHITE: Color = rgb(0xff_ff_ff);
const GREEN_500: Color = rgb(0x22_c5_5e);
const RED_500: Color = rgb(0xef_44_44);

impl Theme {
    /// Every theme, in cycling order
    pub const ALL: [Self; 3] = [Self::Blue, Self::Purple, Self::Dark];

    /// The theme after this one, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Lowercase theme name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Dark => "dark",
        }
    }

    /// Colors for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Blue => Palette {
                background: rgb(0x1e_3a_8a),
                display: SLATE_800,
                text: WHITE,
                number: rgb(0x3b_82_f6),
                operator: rgb(0x4f_46_e5),
                equal: GREEN_500,
                clear: RED_500,
                memory: rgb(0xa8_55_f7),
                special: rgb(0x06_b6_d4),
            },
            Self::Purple => Palette {
                background: rgb(0x58_1c_87),
                display: SLATE_800,
                text: WHITE,
                number: rgb(0xa8_55_f7),
                operator: rgb(0xdb_27_77),
                equal: GREEN_500,
                clear: RED_500,
                memory: rgb(0x8b_5c_f6),
                special: rgb(0xd9_46_ef),
            },
            Self::Dark => Palette {
                background: rgb(0x11_18_27),
                display: SLATE_800,
                text: WHITE,
                number: rgb(0x4b_55_63),
                operator: rgb(0x33_41_55),
                equal: GREEN_500,
                clear: RED_500,
                memory: rgb(0x64_74_8b),
                special: rgb(0x94_a3_b8),
            },
        }
    }
}

impl Palette {
    /// Background color for a button category
    #[must_use]
    pub const fn button(&self, kind: ButtonKind) -> Color {
        match kind {
            ButtonKind::Number => self.number,
            ButtonKind::Operator => self.operator,
            ButtonKind::Equal => self.equal,
            ButtonKind::Clear => self.clear,
            ButtonKind::Memory => self.memory,
            ButtonKind::Special => self.special,
        }
    }
}
