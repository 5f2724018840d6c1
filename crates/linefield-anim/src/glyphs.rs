//! Block glyphs used to draw lines.

/// Left-aligned partial blocks, indexed by width in eighths of a cell (1..=8).
pub const EIGHTHS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
