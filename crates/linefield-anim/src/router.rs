//! Turns pointer and touch input into engine calls.

use linefield_core::InputMode;
use tracing::trace;

use crate::engine::Engine;
use crate::line::LineId;

/// Input in viewport coordinates, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The pointer moved without a button held.
    PointerMoved { x: u16, y: u16 },
    /// The pointer left the surface (or the surface lost focus).
    PointerLeft,
    /// A press began.
    TouchStart { x: u16, y: u16 },
    /// A held press moved.
    TouchMove { x: u16, y: u16 },
    /// The press was released.
    TouchEnd,
}

/// Tracks which line the user is pointing at and forwards engage and
/// disengage calls to the [`Engine`]. Never touches line state itself.
///
/// Moving from one line to another disengages the old line immediately.
/// Ending an interaction (pointer leaving, press released) disengages with
/// the configured release delay.
#[derive(Debug)]
pub struct Router {
    mode: InputMode,
    release_delay_ms: u64,
    target: Option<LineId>,
    generation: u64,
}

impl Router {
    pub fn new(mode: InputMode, release_delay_ms: u64) -> Self {
        Self {
            mode,
            release_delay_ms,
            target: None,
            generation: 0,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch modes, letting go of the current line.
    pub fn set_mode(&mut self, mode: InputMode, engine: &mut Engine, now_ms: f64) {
        if mode != self.mode {
            self.release(engine, now_ms);
            self.mode = mode;
        }
    }

    pub fn release_delay_ms(&self) -> u64 {
        self.release_delay_ms
    }

    /// Line currently engaged through this router.
    pub fn target(&self) -> Option<LineId> {
        self.target
    }

    pub fn handle(&mut self, engine: &mut Engine, event: InputEvent, now_ms: f64) {
        if self.generation != engine.generation() {
            // Lines of the previous grid are gone.
            self.target = None;
            self.generation = engine.generation();
        }

        match event {
            InputEvent::PointerMoved { x, y } if self.mode.tracks_pointer() => {
                self.retarget(engine, engine.line_at(x, y), now_ms);
            }
            InputEvent::PointerLeft if self.mode.tracks_pointer() => {
                self.release(engine, now_ms);
            }
            InputEvent::TouchStart { x, y } if self.mode == InputMode::Tap => {
                self.release(engine, now_ms);
                if let Some(line) = engine.line_at(x, y) {
                    engine.engage(line, now_ms);
                    self.target = Some(line);
                }
            }
            InputEvent::TouchStart { x, y } | InputEvent::TouchMove { x, y }
                if self.mode.tracks_drag() =>
            {
                self.retarget(engine, engine.line_at(x, y), now_ms);
            }
            InputEvent::TouchEnd if self.mode == InputMode::Tap || self.mode.tracks_drag() => {
                self.release(engine, now_ms);
            }
            _ => {}
        }
    }

    fn retarget(&mut self, engine: &mut Engine, line: Option<LineId>, now_ms: f64) {
        if line == self.target {
            return;
        }
        if let Some(old) = self.target.take() {
            engine.disengage(old, 0, now_ms);
        }
        if let Some(new) = line {
            engine.engage(new, now_ms);
            self.target = Some(new);
        }
        trace!(line = ?self.target, "retargeted");
    }

    fn release(&mut self, engine: &mut Engine, now_ms: f64) {
        if let Some(old) = self.target.take() {
            engine.disengage(old, self.release_delay_ms, now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Phase;
    use linefield_core::{AnimationTiming, Breakpoint, CellPolicy, GridConfig, Viewport};

    fn engine() -> Engine {
        let grid = GridConfig {
            policy: CellPolicy::Fixed {
                row_height: 2,
                col_width: 2,
            },
            breakpoint: Breakpoint::DISABLED,
        };
        let mut engine = Engine::new(AnimationTiming::default(), grid);
        engine.populate(Viewport::new(8, 4)).unwrap();
        engine
    }

    fn grow(engine: &mut Engine, until: f64) {
        let mut now = 0.0;
        while now <= until {
            engine.tick(now);
            now += 16.0;
        }
    }

    #[test]
    fn test_hover_moves_between_lines() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Hover, 0);
        let ids = engine.line_ids().to_vec();

        router.handle(&mut engine, InputEvent::PointerMoved { x: 0, y: 0 }, 0.0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 1, y: 1 }, 5.0);
        assert_eq!(router.target(), Some(ids[0]));
        assert_eq!(engine.phase(ids[0]), Some(Phase::Growing { shrink_after: false }));

        router.handle(&mut engine, InputEvent::PointerMoved { x: 2, y: 0 }, 10.0);
        assert_eq!(router.target(), Some(ids[1]));
        assert_eq!(engine.phase(ids[0]), Some(Phase::Growing { shrink_after: true }));
        assert_eq!(engine.phase(ids[1]), Some(Phase::Growing { shrink_after: false }));

        router.handle(&mut engine, InputEvent::PointerLeft, 20.0);
        assert_eq!(router.target(), None);
        assert_eq!(engine.phase(ids[1]), Some(Phase::Growing { shrink_after: true }));
    }

    #[test]
    fn test_drag_release_uses_release_delay() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Drag, 1500);
        let ids = engine.line_ids().to_vec();

        router.handle(&mut engine, InputEvent::TouchStart { x: 0, y: 0 }, 0.0);
        grow(&mut engine, 520.0);
        router.handle(&mut engine, InputEvent::TouchMove { x: 6, y: 2 }, 520.0);
        assert_eq!(router.target(), Some(ids[7]));
        // the previous line lets go without delay
        assert_eq!(engine.phase(ids[0]), Some(Phase::ShrinkPending));
        assert_eq!(engine.next_deadline(), Some(520.0));

        let mut now = 520.0;
        while now <= 1100.0 {
            engine.tick(now);
            now += 16.0;
        }
        router.handle(&mut engine, InputEvent::TouchEnd, 1100.0);
        assert_eq!(engine.phase(ids[7]), Some(Phase::ShrinkPending));
        assert_eq!(engine.next_deadline(), Some(2600.0));
    }

    #[test]
    fn test_hover_mode_ignores_touch() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Hover, 0);
        router.handle(&mut engine, InputEvent::TouchStart { x: 0, y: 0 }, 0.0);
        assert_eq!(router.target(), None);
        assert_eq!(engine.pending_frames(), 0);
    }

    #[test]
    fn test_tap_swallows_moves() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Tap, 0);
        let ids = engine.line_ids().to_vec();

        router.handle(&mut engine, InputEvent::TouchStart { x: 2, y: 0 }, 0.0);
        router.handle(&mut engine, InputEvent::TouchMove { x: 6, y: 0 }, 10.0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 6, y: 0 }, 12.0);
        assert_eq!(router.target(), Some(ids[1]));
        assert_eq!(engine.phase(ids[3]), Some(Phase::Idle));

        router.handle(&mut engine, InputEvent::TouchEnd, 20.0);
        assert_eq!(router.target(), None);
        assert_eq!(engine.phase(ids[1]), Some(Phase::Growing { shrink_after: true }));
    }

    #[test]
    fn test_off_grid_releases_previous_line() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Combined, 0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 0, y: 0 }, 0.0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 50, y: 50 }, 5.0);
        assert_eq!(router.target(), None);
    }

    #[test]
    fn test_forgets_target_after_repopulation() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Combined, 0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 0, y: 0 }, 0.0);
        assert!(router.target().is_some());

        engine.populate(Viewport::new(8, 4)).unwrap();
        router.handle(&mut engine, InputEvent::PointerMoved { x: 0, y: 0 }, 10.0);
        let fresh = engine.line_ids()[0];
        assert_eq!(router.target(), Some(fresh));
        assert_eq!(engine.phase(fresh), Some(Phase::Growing { shrink_after: false }));
    }

    #[test]
    fn test_mode_switch_releases_target() {
        let mut engine = engine();
        let mut router = Router::new(InputMode::Hover, 0);
        router.handle(&mut engine, InputEvent::PointerMoved { x: 0, y: 0 }, 0.0);
        router.set_mode(InputMode::Tap, &mut engine, 5.0);
        assert_eq!(router.mode(), InputMode::Tap);
        assert_eq!(router.target(), None);
    }
}
