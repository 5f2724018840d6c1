//! Animation engine for the linefield grid.
//!
//! Each line in the grid runs a small state machine (idle, growing, grown,
//! shrink pending, shrinking) driven by a deterministic scheduler of frame
//! callbacks and one-shot timers. Time is passed in explicitly as
//! milliseconds, so the host decides what a frame is and tests can step the
//! clock by hand. The [`Router`] turns pointer and touch input into engage
//! and disengage calls, and [`LineFieldView`] draws the result with ratatui.

mod color;
mod easing;
mod engine;
mod glyphs;
mod grid;
mod line;
mod render;
mod router;
mod scheduler;

pub use color::line_color;
pub use easing::ease_in_out_quad;
pub use engine::Engine;
pub use grid::{GridLayout, parse_min_track, resolve_cell_size};
pub use line::{Element, LineId, LineState, Phase, Segment};
pub use render::LineFieldView;
pub use router::{InputEvent, Router};
pub use scheduler::{FrameId, Scheduler, TimerId};
