use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color themes for the lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    Magenta,
    Amber,
    Mono,
}

impl ColorTheme {
    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Mono,
            ColorTheme::Mono => ColorTheme::Cyan,
        }
    }

    /// Hue in degrees and saturation used for the lines.
    pub fn hue_saturation(self) -> (f32, f32) {
        match self {
            ColorTheme::Cyan => (190.0, 0.8),
            ColorTheme::Green => (130.0, 0.7),
            ColorTheme::Magenta => (300.0, 0.7),
            ColorTheme::Amber => (40.0, 0.9),
            ColorTheme::Mono => (0.0, 0.0),
        }
    }

    /// Flat terminal color for text such as the help bar.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Amber => Color::Yellow,
            ColorTheme::Mono => Color::White,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Amber => "amber",
            ColorTheme::Mono => "mono",
        }
    }
}
