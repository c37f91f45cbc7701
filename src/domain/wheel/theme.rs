//! Chart colour themes and the per-category swatch palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `RRGGBB` without a leading `#`, as used by LaTeX `xcolor`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS/SVG colour string.
    pub fn css(&self) -> String {
        if self.a == 255 {
            format!("#{}", self.hex())
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

/// Named theme selector, e.g. from `?theme=bold` or a stored preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Standard,
    Bold,
}

impl ThemeName {
    /// The other theme; used by a toggle.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Standard => ThemeName::Bold,
            ThemeName::Bold => ThemeName::Standard,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Standard => write!(f, "standard"),
            ThemeName::Bold => write!(f, "bold"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "standard" | "default" => Ok(ThemeName::Standard),
            "bold" => Ok(ThemeName::Bold),
            other => Err(ValidationError::invalid_format(
                "theme",
                format!("unknown theme '{}'", other),
            )),
        }
    }
}

/// Colours used to draw a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub name: ThemeName,
    pub background: Rgba,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub point: Rgba,
    pub grid: Rgba,
    pub spoke: Rgba,
    pub label: Rgba,
    pub tick: Rgba,
}

impl ChartTheme {
    /// Dark background with a translucent blue wheel.
    pub const STANDARD: ChartTheme = ChartTheme {
        name: ThemeName::Standard,
        background: Rgba::rgb(0x0a, 0x12, 0x2a),
        fill: Rgba::rgba(110, 168, 254, 64),
        stroke: Rgba::rgb(110, 168, 254),
        point: Rgba::rgb(0xff, 0xff, 0xff),
        grid: Rgba::rgba(255, 255, 255, 38),
        spoke: Rgba::rgba(255, 255, 255, 31),
        label: Rgba::rgb(0xec, 0xf0, 0xff),
        tick: Rgba::rgb(0x9a, 0xa3, 0xc7),
    };

    /// High-contrast variant.
    pub const BOLD: ChartTheme = ChartTheme {
        name: ThemeName::Bold,
        background: Rgba::rgb(0x11, 0x11, 0x11),
        fill: Rgba::rgba(255, 196, 0, 90),
        stroke: Rgba::rgb(255, 196, 0),
        point: Rgba::rgb(0xff, 0xff, 0xff),
        grid: Rgba::rgba(255, 255, 255, 64),
        spoke: Rgba::rgba(255, 255, 255, 51),
        label: Rgba::rgb(0xff, 0xff, 0xff),
        tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
    };

    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Standard => Self::STANDARD,
            ThemeName::Bold => Self::BOLD,
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::STANDARD
    }
}

const SWATCHES: [Rgba; 8] = [
    Rgba::rgb(0x6e, 0xa8, 0xfe),
    Rgba::rgb(0xf7, 0x8c, 0x6b),
    Rgba::rgb(0x4c, 0xc9, 0x8f),
    Rgba::rgb(0xf5, 0xc5, 0x42),
    Rgba::rgb(0xe5, 0x6b, 0xa8),
    Rgba::rgb(0x9b, 0x7b, 0xf0),
    Rgba::rgb(0x3f, 0xc1, 0xd0),
    Rgba::rgb(0xa3, 0xb3, 0x4a),
];

/// Swatch colour for the category at `index`; cycles past eight.
pub fn swatch(index: usize) -> Rgba {
    SWATCHES[index % SWATCHES.len()]
}
