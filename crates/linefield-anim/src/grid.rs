//! Grid sizing: resolving the cell size and fitting cells into the viewport.

use linefield_core::{Axis, CellPolicy, CellSize, GridConfig, LayoutError, Viewport};

use crate::line::Element;

/// Rows and columns of lines that fit a viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u16,
    pub cols: u16,
    /// `None` until a population succeeded.
    pub cell: Option<CellSize>,
}

impl GridLayout {
    /// Fit as many whole cells as possible: `floor(height / cell.height)` rows
    /// by `floor(width / cell.width)` columns.
    pub fn fit(viewport: Viewport, cell: CellSize) -> Self {
        Self {
            rows: viewport.height / cell.height,
            cols: viewport.width / cell.width,
            cell: Some(cell),
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell rectangle at a grid position.
    pub fn element(&self, row: u16, col: u16) -> Option<Element> {
        let cell = self.cell?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Element {
            row,
            col,
            x: col * cell.width,
            y: row * cell.height,
            width: cell.width,
            height: cell.height,
        })
    }

    /// Row-major index of the cell containing a viewport coordinate.
    pub fn index_at(&self, x: u16, y: u16) -> Option<usize> {
        let cell = self.cell?;
        let col = x / cell.width;
        let row = y / cell.height;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(usize::from(row) * usize::from(self.cols) + usize::from(col))
    }
}

/// Resolve the cell size for a viewport, applying the breakpoint first.
pub fn resolve_cell_size(config: &GridConfig, viewport: Viewport) -> Result<CellSize, LayoutError> {
    let bp = config.breakpoint;
    if bp.applies(viewport.width) {
        return Ok(CellSize {
            width: viewport.width.max(1),
            height: positive(Axis::Rows, f64::from(bp.row_height))?,
        });
    }

    match &config.policy {
        CellPolicy::Fixed {
            row_height,
            col_width,
        } => Ok(CellSize {
            width: positive(Axis::Columns, f64::from(*col_width))?,
            height: positive(Axis::Rows, f64::from(*row_height))?,
        }),
        CellPolicy::Track { rows, columns } => Ok(CellSize {
            width: positive(Axis::Columns, parse_min_track(columns, Axis::Columns)?)?,
            height: positive(Axis::Rows, parse_min_track(rows, Axis::Rows)?)?,
        }),
    }
}

/// Read the minimum track size from a track-sizing expression.
///
/// Accepts `minmax(<n>px, ...)` anywhere in the expression (so
/// `repeat(auto-fill, minmax(2px, 1fr))` works) or a resolved track list,
/// in which case the first track is used. The `px` suffix is optional.
pub fn parse_min_track(expr: &str, axis: Axis) -> Result<f64, LayoutError> {
    let malformed = || LayoutError::MalformedTrack {
        axis,
        expr: expr.to_string(),
    };

    let trimmed = expr.trim();
    let term = match trimmed.find("minmax(") {
        Some(start) => trimmed[start + "minmax(".len()..].split(',').next(),
        None => trimmed.split_whitespace().next(),
    };
    let term = term.map(str::trim).filter(|t| !t.is_empty()).ok_or_else(malformed)?;
    let number = term.strip_suffix("px").unwrap_or(term).trim();
    number.parse::<f64>().map_err(|_| malformed())
}

fn positive(axis: Axis, value: f64) -> Result<u16, LayoutError> {
    let cells = value.floor();
    if !value.is_finite() || cells < 1.0 || cells > f64::from(u16::MAX) {
        return Err(LayoutError::InvalidCellSize { axis, value });
    }
    Ok(cells as u16)
}
