//! Per-line animation state.

use slotmap::new_key_type;

use crate::easing::ease_in_out_quad;
use crate::scheduler::{FrameId, TimerId};

new_key_type! {
    /// Identity of a line within one populated grid.
    pub struct LineId;
}

/// Cell of the grid a line is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub row: u16,
    pub col: u16,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Element {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Where a line is in its grow/shrink cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// At rest.
    #[default]
    Idle,
    /// Widening toward the target scale. `shrink_after` is set when the line
    /// was disengaged mid-growth; the shrink starts once growth completes.
    Growing { shrink_after: bool },
    /// Held at the target scale.
    Grown,
    /// Waiting for the shrink delay to elapse.
    ShrinkPending,
    /// Narrowing back to the resting scale.
    Shrinking,
}

/// Snapshot taken at the start of a grow or shrink segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_ms: f64,
    pub from: f32,
    pub to: f32,
    pub duration_ms: f64,
}

impl Segment {
    /// Linear progress through the segment at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased scale at the given progress, never past either end.
    pub fn scale_at(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            return self.to;
        }
        let value = self.from + (self.to - self.from) * ease_in_out_quad(progress);
        value.clamp(self.from.min(self.to), self.from.max(self.to))
    }
}

/// State of one line. Owned by the engine's store.
#[derive(Debug, Clone)]
pub struct LineState {
    pub(crate) element: Element,
    pub(crate) scale: f32,
    pub(crate) phase: Phase,
    pub(crate) frame: Option<FrameId>,
    pub(crate) timer: Option<TimerId>,
    pub(crate) segment: Segment,
}

impl LineState {
    pub(crate) fn new(element: Element, resting_scale: f32) -> Self {
        Self {
            element,
            scale: resting_scale,
            phase: Phase::Idle,
            frame: None,
            timer: None,
            segment: Segment {
                start_ms: 0.0,
                from: resting_scale,
                to: resting_scale,
                duration_ms: 0.0,
            },
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Current width scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active or most recent segment.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }
}
