//! Frame callbacks and one-shot timers.
//!
//! Nothing runs by itself: the engine drains due work on every tick with an
//! explicit timestamp. Handles are versioned slotmap keys, so a cancelled or
//! already fired handle never matches live work again.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle of a pending frame callback.
    pub struct FrameId;
    /// Handle of a pending one-shot timer.
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy)]
struct Timer<T> {
    deadline_ms: f64,
    task: T,
}

/// Pending frame callbacks and timers carrying a task payload.
#[derive(Debug)]
pub struct Scheduler<T> {
    frames: SlotMap<FrameId, T>,
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            frames: SlotMap::with_key(),
            timers: SlotMap::with_key(),
        }
    }

    /// Ask for `task` to run on the next frame.
    pub fn request_frame(&mut self, task: T) -> FrameId {
        self.frames.insert(task)
    }

    /// Cancel a frame callback. Returns false if it already ran or was cancelled.
    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        self.frames.remove(id).is_some()
    }

    /// Run `task` once the clock reaches `deadline_ms`.
    pub fn set_timeout(&mut self, deadline_ms: f64, task: T) -> TimerId {
        self.timers.insert(Timer { deadline_ms, task })
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_frame_pending(&self, id: FrameId) -> bool {
        self.frames.contains_key(id)
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest timer deadline, if any timer is pending.
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .map(|t| t.deadline_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Remove and return every frame callback registered so far.
    ///
    /// Frames requested while the returned batch is being handled stay
    /// pending for the next call.
    pub fn take_frames(&mut self) -> Vec<(FrameId, T)> {
        self.frames.drain().collect()
    }

    /// Remove and return the timers due at `now_ms`, earliest first.
    pub fn take_due_timers(&mut self, now_ms: f64) -> Vec<(TimerId, T)> {
        let mut due: Vec<(TimerId, f64)> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= now_ms)
            .map(|(id, t)| (id, t.deadline_ms))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due.into_iter()
            .filter_map(|(id, _)| self.timers.remove(id).map(|t| (id, t.task)))
            .collect()
    }
}
