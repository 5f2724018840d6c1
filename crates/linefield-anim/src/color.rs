//! Color helpers for drawing lines.

use linefield_core::ColorTheme;
use ratatui::style::Color;

/// Color of a line that is `growth` of the way from resting to target (0.0-1.0).
///
/// Resting lines are dim; fully grown lines are bright and slightly more
/// saturated.
pub fn line_color(theme: ColorTheme, growth: f32) -> Color {
    let growth = growth.clamp(0.0, 1.0);
    let (hue, saturation) = theme.hue_saturation();
    let saturation = (saturation * (0.7 + growth * 0.3)).min(1.0);
    let lightness = 0.3 + growth * 0.35;
    hsl(hue, saturation, lightness)
}

/// HSL to RGB by chroma. The hue selects one of six 60° sectors.
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let offset = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + offset).clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
