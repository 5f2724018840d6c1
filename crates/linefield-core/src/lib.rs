//! Core types shared by the linefield crates.
//!
//! Everything here is plain data: viewport geometry, animation timing, the
//! cell-size policy of the grid and the user-facing toggles (input mode and
//! color theme). The behaviour lives in `linefield-anim`.

mod error;
mod geometry;
mod input;
mod layout;
mod theme;
mod timing;

pub use error::{Axis, LayoutError};
pub use geometry::{CellSize, Viewport};
pub use input::InputMode;
pub use layout::{Breakpoint, CellPolicy, GridConfig};
pub use theme::ColorTheme;
pub use timing::AnimationTiming;
