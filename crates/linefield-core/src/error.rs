use std::fmt;

/// Grid axis a cell dimension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("row height"),
            Axis::Columns => f.write_str("column width"),
        }
    }
}

/// The cell-size policy could not produce a usable cell.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A dimension resolved to zero, a negative number or something non-finite.
    #[error("{axis} must be a positive number of cells, got {value}")]
    InvalidCellSize { axis: Axis, value: f64 },
    /// A track-sizing expression had no readable minimum term.
    #[error("cannot read a minimum {axis} from track expression {expr:?}")]
    MalformedTrack { axis: Axis, expr: String },
}
