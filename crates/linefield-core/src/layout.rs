use serde::{Deserialize, Serialize};

/// How the size of one grid cell is determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellPolicy {
    /// Constant cell dimensions.
    Fixed { row_height: u16, col_width: u16 },
    /// Track-sizing expressions such as `repeat(auto-fill, minmax(2px, 1fr))`
    /// or a resolved track list like `"2px 2px 2px"`. The minimum track size
    /// becomes the cell size.
    Track { rows: String, columns: String },
}

impl Default for CellPolicy {
    fn default() -> Self {
        CellPolicy::Fixed {
            row_height: 2,
            col_width: 2,
        }
    }
}

/// Narrow-viewport rule: one full-width column with taller rows.
///
/// A `max_width` of zero turns the rule off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoint {
    /// Viewports at most this wide use the narrow layout.
    pub max_width: u16,
    /// Row height used in the narrow layout.
    pub row_height: u16,
}

impl Breakpoint {
    /// A breakpoint that never applies.
    pub const DISABLED: Breakpoint = Breakpoint {
        max_width: 0,
        row_height: 3,
    };

    /// Whether a viewport of this width uses the narrow layout.
    pub fn applies(&self, width: u16) -> bool {
        self.max_width > 0 && width <= self.max_width
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            max_width: 60,
            row_height: 3,
        }
    }
}

/// Grid sizing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub policy: CellPolicy,
    pub breakpoint: Breakpoint,
}
