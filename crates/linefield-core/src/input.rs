use serde::{Deserialize, Serialize};

/// Which input modalities drive the lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Mouse motion only: lines follow the pointer.
    Hover,
    /// Press and drag across the grid, release to let go.
    Drag,
    /// Press engages a single line, release lets it go. Motion is ignored.
    Tap,
    /// Hover and drag together.
    #[default]
    Combined,
}

impl InputMode {
    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            InputMode::Hover => InputMode::Drag,
            InputMode::Drag => InputMode::Tap,
            InputMode::Tap => InputMode::Combined,
            InputMode::Combined => InputMode::Hover,
        }
    }

    /// Short label for the help bar.
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Hover => "hover",
            InputMode::Drag => "drag",
            InputMode::Tap => "tap",
            InputMode::Combined => "combined",
        }
    }

    pub fn tracks_pointer(self) -> bool {
        matches!(self, InputMode::Hover | InputMode::Combined)
    }

    pub fn tracks_drag(self) -> bool {
        matches!(self, InputMode::Drag | InputMode::Combined)
    }
}
