//! The line store and its animation state machine.
//!
//! The engine owns every [`LineState`] and the [`Scheduler`] that drives
//! them. Input arrives through [`Engine::engage`] and [`Engine::disengage`];
//! time advances through [`Engine::tick`]. Each line holds at most one frame
//! handle and one timer handle, and every transition that supersedes work
//! cancels the old handle before scheduling new work.

use linefield_core::{AnimationTiming, GridConfig, LayoutError, Viewport};
use slotmap::SlotMap;
use tracing::{debug, error, trace};

use crate::grid::{GridLayout, resolve_cell_size};
use crate::line::{LineId, LineState, Phase, Segment};
use crate::scheduler::{FrameId, Scheduler, TimerId};

/// Default trailing debounce for viewport resizes.
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;

/// Work items carried by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Advance a line's current segment.
    Animate(LineId),
    /// The shrink delay of a line has elapsed.
    StartShrink(LineId),
    /// Debounced grid rebuild after a resize burst.
    Repopulate,
}

/// Animation engine and state store for one grid of lines.
#[derive(Debug)]
pub struct Engine {
    timing: AnimationTiming,
    grid: GridConfig,
    resize_debounce_ms: u64,
    lines: SlotMap<LineId, LineState>,
    /// Line ids in row-major order.
    order: Vec<LineId>,
    layout: GridLayout,
    scheduler: Scheduler<Task>,
    pending_resize: Option<(TimerId, Viewport)>,
    generation: u64,
    last_error: Option<LayoutError>,
}

impl Engine {
    /// Create an engine with an empty grid. Call [`Engine::populate`] to build it.
    pub fn new(timing: AnimationTiming, grid: GridConfig) -> Self {
        Self {
            timing,
            grid,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            lines: SlotMap::with_key(),
            order: Vec::new(),
            layout: GridLayout::default(),
            scheduler: Scheduler::new(),
            pending_resize: None,
            generation: 0,
            last_error: None,
        }
    }

    /// Set the trailing debounce used by [`Engine::request_repopulate`].
    pub fn with_resize_debounce(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    pub fn grid_config(&self) -> &GridConfig {
        &self.grid
    }

    /// Replace the grid sizing rules. Takes effect on the next population.
    pub fn set_grid_config(&mut self, grid: GridConfig) {
        self.grid = grid;
    }

    /// Tear down the current grid and build a new one for `viewport`.
    ///
    /// Every pending frame and timer of the old lines is cancelled first. If
    /// the cell size cannot be resolved the grid stays empty and the error is
    /// kept as [`Engine::last_error`].
    pub fn populate(&mut self, viewport: Viewport) -> Result<GridLayout, LayoutError> {
        self.teardown();
        self.generation += 1;

        let cell = match resolve_cell_size(&self.grid, viewport) {
            Ok(cell) => cell,
            Err(err) => {
                error!(%err, ?viewport, "grid population aborted");
                self.last_error = Some(err.clone());
                return Err(err);
            }
        };
        self.last_error = None;

        let layout = GridLayout::fit(viewport, cell);
        self.order.reserve(layout.len());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                if let Some(element) = layout.element(row, col) {
                    let id = self
                        .lines
                        .insert(LineState::new(element, self.timing.resting_scale));
                    self.order.push(id);
                }
            }
        }
        self.layout = layout;

        debug!(
            rows = layout.rows,
            cols = layout.cols,
            lines = self.order.len(),
            generation = self.generation,
            "grid populated"
        );
        Ok(layout)
    }

    /// Schedule a repopulation `resize_debounce_ms` after the latest request.
    /// Earlier pending requests are dropped.
    pub fn request_repopulate(&mut self, viewport: Viewport, now_ms: f64) {
        if let Some((timer, _)) = self.pending_resize.take() {
            self.scheduler.clear_timeout(timer);
        }
        let deadline = now_ms + self.resize_debounce_ms as f64;
        let timer = self.scheduler.set_timeout(deadline, Task::Repopulate);
        self.pending_resize = Some((timer, viewport));
        trace!(?viewport, deadline, "repopulation scheduled");
    }

    /// Pointer or touch entered a line.
    pub fn engage(&mut self, id: LineId, now_ms: f64) {
        let Some(state) = self.lines.get_mut(id) else {
            trace!(?id, "engage on a line from an old grid");
            return;
        };
        match state.phase {
            Phase::Idle | Phase::ShrinkPending | Phase::Shrinking => {
                begin_segment(
                    state,
                    &mut self.scheduler,
                    id,
                    now_ms,
                    self.timing.target_scale,
                    self.timing.grow_ms,
                );
                state.phase = Phase::Growing {
                    shrink_after: false,
                };
                trace!(?id, from = state.segment.from, "growing");
            }
            // Pointer came back before growth finished: keep the line wide.
            Phase::Growing { .. } => {
                state.phase = Phase::Growing {
                    shrink_after: false,
                };
            }
            Phase::Grown => {}
        }
    }

    /// Pointer or touch left a line. The shrink starts `delay_ms` later, or
    /// as soon as growth completes when the line is still growing.
    pub fn disengage(&mut self, id: LineId, delay_ms: u64, now_ms: f64) {
        let Some(state) = self.lines.get_mut(id) else {
            trace!(?id, "disengage on a line from an old grid");
            return;
        };
        match state.phase {
            Phase::Growing { .. } => {
                state.phase = Phase::Growing { shrink_after: true };
            }
            Phase::Grown | Phase::ShrinkPending => {
                cancel_work(state, &mut self.scheduler);
                let deadline = now_ms + delay_ms as f64;
                state.timer = Some(
                    self.scheduler
                        .set_timeout(deadline, Task::StartShrink(id)),
                );
                state.phase = Phase::ShrinkPending;
                trace!(?id, deadline, "shrink pending");
            }
            Phase::Idle | Phase::Shrinking => {}
        }
    }

    /// Advance the clock to `now_ms`: fire due timers, then run the frame
    /// callbacks that were pending when the tick started.
    pub fn tick(&mut self, now_ms: f64) {
        let frames = self.scheduler.take_frames();
        for (timer, task) in self.scheduler.take_due_timers(now_ms) {
            self.run_timer(timer, task, now_ms);
        }
        for (frame, task) in frames {
            self.run_frame(frame, task, now_ms);
        }
    }

    fn run_timer(&mut self, timer: TimerId, task: Task, now_ms: f64) {
        match task {
            Task::StartShrink(id) => {
                let Some(state) = self.lines.get_mut(id) else {
                    trace!(?id, "stale shrink timer");
                    return;
                };
                if state.timer != Some(timer) {
                    trace!(?id, "superseded shrink timer");
                    return;
                }
                state.timer = None;
                if state.phase != Phase::ShrinkPending {
                    return;
                }
                begin_segment(
                    state,
                    &mut self.scheduler,
                    id,
                    now_ms,
                    self.timing.resting_scale,
                    self.timing.shrink_ms,
                );
                state.phase = Phase::Shrinking;
                trace!(?id, from = state.segment.from, "shrinking");
            }
            Task::Repopulate => {
                let Some((pending, viewport)) = self.pending_resize else {
                    return;
                };
                if pending != timer {
                    return;
                }
                self.pending_resize = None;
                match self.populate(viewport) {
                    Ok(layout) => {
                        trace!(rows = layout.rows, cols = layout.cols, "repopulated after resize")
                    }
                    Err(err) => debug!(%err, "resize left the grid empty"),
                }
            }
            Task::Animate(_) => {}
        }
    }

    fn run_frame(&mut self, frame: FrameId, task: Task, now_ms: f64) {
        let Task::Animate(id) = task else {
            return;
        };
        let Some(state) = self.lines.get_mut(id) else {
            trace!(?id, "stale frame");
            return;
        };
        if state.frame != Some(frame) {
            trace!(?id, "superseded frame");
            return;
        }
        state.frame = None;

        let progress = state.segment.progress(now_ms);
        state.scale = state.segment.scale_at(progress);
        if progress < 1.0 {
            state.frame = Some(self.scheduler.request_frame(Task::Animate(id)));
            return;
        }

        match state.phase {
            Phase::Growing { shrink_after: true } => {
                begin_segment(
                    state,
                    &mut self.scheduler,
                    id,
                    now_ms,
                    self.timing.resting_scale,
                    self.timing.shrink_ms,
                );
                state.phase = Phase::Shrinking;
                trace!(?id, "grown, shrinking right away");
            }
            Phase::Growing {
                shrink_after: false,
            } => {
                state.phase = Phase::Grown;
                trace!(?id, "grown");
            }
            Phase::Shrinking => {
                state.scale = self.timing.resting_scale;
                if let Some(timer) = state.timer.take() {
                    self.scheduler.clear_timeout(timer);
                }
                state.phase = Phase::Idle;
                trace!(?id, "idle");
            }
            Phase::Idle | Phase::Grown | Phase::ShrinkPending => {}
        }
    }

    fn teardown(&mut self) {
        for state in self.lines.values_mut() {
            cancel_work(state, &mut self.scheduler);
            state.scale = self.timing.resting_scale;
            state.phase = Phase::Idle;
        }
        self.lines.clear();
        self.order.clear();
        self.layout = GridLayout::default();
    }

    pub fn line(&self, id: LineId) -> Option<&LineState> {
        self.lines.get(id)
    }

    pub fn phase(&self, id: LineId) -> Option<Phase> {
        self.lines.get(id).map(LineState::phase)
    }

    pub fn scale(&self, id: LineId) -> Option<f32> {
        self.lines.get(id).map(LineState::scale)
    }

    /// Lines in row-major order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &LineState)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.lines.get(id).map(|state| (id, state)))
    }

    pub fn line_ids(&self) -> &[LineId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Line whose cell contains the viewport coordinate.
    pub fn line_at(&self, x: u16, y: u16) -> Option<LineId> {
        self.layout
            .index_at(x, y)
            .and_then(|index| self.order.get(index).copied())
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Incremented on every population, successful or not.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The error of the most recent failed population, cleared on success.
    pub fn last_error(&self) -> Option<&LayoutError> {
        self.last_error.as_ref()
    }

    /// True while any frame callback is pending.
    pub fn is_animating(&self) -> bool {
        self.scheduler.pending_frames() > 0
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }

    pub fn pending_frames(&self) -> usize {
        self.scheduler.pending_frames()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_timers()
    }
}

/// Drop a line's frame and timer handles, cancelling the scheduled work.
fn cancel_work(state: &mut LineState, scheduler: &mut Scheduler<Task>) {
    if let Some(frame) = state.frame.take() {
        scheduler.cancel_frame(frame);
    }
    if let Some(timer) = state.timer.take() {
        scheduler.clear_timeout(timer);
    }
}

/// Start a segment from the line's current scale and request its first frame.
fn begin_segment(
    state: &mut LineState,
    scheduler: &mut Scheduler<Task>,
    id: LineId,
    now_ms: f64,
    to: f32,
    duration_ms: u64,
) {
    cancel_work(state, scheduler);
    state.segment = Segment {
        start_ms: now_ms,
        from: state.scale,
        to,
        duration_ms: duration_ms as f64,
    };
    state.frame = Some(scheduler.request_frame(Task::Animate(id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefield_core::{Axis, Breakpoint, CellPolicy};

    const FRAME_MS: f64 = 16.0;

    fn engine() -> Engine {
        let grid = GridConfig {
            policy: CellPolicy::Fixed {
                row_height: 2,
                col_width: 2,
            },
            breakpoint: Breakpoint::DISABLED,
        };
        let mut engine = Engine::new(AnimationTiming::default(), grid);
        engine.populate(Viewport::new(20, 10)).unwrap();
        engine
    }

    /// Tick every frame from `from` up to and including `to`.
    fn run(engine: &mut Engine, from: f64, to: f64) {
        let mut now = from;
        while now < to {
            engine.tick(now);
            now += FRAME_MS;
        }
        engine.tick(to);
    }

    fn first(engine: &Engine) -> LineId {
        engine.line_ids()[0]
    }

    #[test]
    fn test_populate_creates_rows_times_cols() {
        let engine = engine();
        let layout = engine.layout();
        assert_eq!((layout.rows, layout.cols), (5, 10));
        assert_eq!(engine.len(), 50);
        for (_, line) in engine.lines() {
            assert_eq!(line.phase(), Phase::Idle);
            assert_eq!(line.scale(), 1.2);
        }
    }

    #[test]
    fn test_lines_are_row_major() {
        let engine = engine();
        let cells: Vec<(u16, u16)> = engine
            .lines()
            .take(11)
            .map(|(_, l)| (l.element().row, l.element().col))
            .collect();
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[9], (0, 9));
        assert_eq!(cells[10], (1, 0));
        assert_eq!(engine.line_at(3, 2), Some(engine.line_ids()[11]));
    }

    #[test]
    fn test_engage_grows_to_target() {
        let mut engine = engine();
        let id = first(&engine);

        engine.engage(id, 0.0);
        assert_eq!(engine.phase(id), Some(Phase::Growing { shrink_after: false }));

        run(&mut engine, 0.0, 500.0);
        assert_eq!(engine.phase(id), Some(Phase::Grown));
        assert_eq!(engine.scale(id), Some(10.0));
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_midpoint_scale() {
        let mut engine = engine();
        let id = first(&engine);

        engine.engage(id, 0.0);
        engine.tick(250.0);
        let scale = engine.scale(id).unwrap();
        assert!((scale - 5.6).abs() < 1e-4, "got {scale}");
    }

    #[test]
    fn test_disengage_grown_shrinks_after_delay() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);

        engine.disengage(id, 300, 600.0);
        assert_eq!(engine.phase(id), Some(Phase::ShrinkPending));

        run(&mut engine, 600.0, 890.0);
        assert_eq!(engine.phase(id), Some(Phase::ShrinkPending));
        assert_eq!(engine.scale(id), Some(10.0));

        run(&mut engine, 890.0, 600.0 + 300.0 + 1500.0 + FRAME_MS);
        assert_eq!(engine.phase(id), Some(Phase::Idle));
        assert_eq!(engine.scale(id), Some(1.2));
        assert_eq!(engine.pending_frames(), 0);
        assert_eq!(engine.pending_timers(), 0);
    }

    #[test]
    fn test_disengage_during_growth_defers_shrink() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 200.0);

        engine.disengage(id, 0, 200.0);
        assert_eq!(engine.phase(id), Some(Phase::Growing { shrink_after: true }));

        run(&mut engine, 200.0, 480.0);
        assert_eq!(engine.phase(id), Some(Phase::Growing { shrink_after: true }));

        engine.tick(500.0);
        assert_eq!(engine.phase(id), Some(Phase::Shrinking));
        assert_eq!(engine.scale(id), Some(10.0));
        assert_eq!(engine.line(id).unwrap().segment().from, 10.0);
    }

    #[test]
    fn test_engage_while_shrinking_resumes_from_current_scale() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);
        engine.disengage(id, 0, 500.0);
        run(&mut engine, 500.0, 1200.0);
        assert_eq!(engine.phase(id), Some(Phase::Shrinking));

        let interrupted = engine.scale(id).unwrap();
        assert!(interrupted > 1.2 && interrupted < 10.0);

        engine.engage(id, 1210.0);
        let line = engine.line(id).unwrap();
        assert_eq!(line.phase(), Phase::Growing { shrink_after: false });
        assert_eq!(line.segment().from, interrupted);
        assert_eq!(line.segment().to, 10.0);
        assert_eq!(engine.pending_frames(), 1);

        engine.tick(1226.0);
        assert!(engine.scale(id).unwrap() >= interrupted);
    }

    #[test]
    fn test_engage_before_shrink_timer_cancels_it() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);
        engine.disengage(id, 1500, 500.0);
        assert_eq!(engine.pending_timers(), 1);

        engine.engage(id, 800.0);
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.phase(id), Some(Phase::Growing { shrink_after: false }));

        run(&mut engine, 800.0, 2500.0);
        assert_eq!(engine.phase(id), Some(Phase::Grown));
        assert_eq!(engine.scale(id), Some(10.0));
    }

    #[test]
    fn test_reengage_during_growth_clears_shrink_flag() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        engine.disengage(id, 0, 100.0);
        engine.engage(id, 150.0);
        run(&mut engine, 0.0, 600.0);
        assert_eq!(engine.phase(id), Some(Phase::Grown));
    }

    #[test]
    fn test_disengage_while_shrink_pending_restarts_timer() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);

        engine.disengage(id, 1000, 600.0);
        assert_eq!(engine.next_deadline(), Some(1600.0));

        engine.disengage(id, 100, 700.0);
        assert_eq!(engine.pending_timers(), 1);
        assert_eq!(engine.next_deadline(), Some(800.0));
        assert_eq!(engine.phase(id), Some(Phase::ShrinkPending));

        run(&mut engine, 700.0, 790.0);
        assert_eq!(engine.phase(id), Some(Phase::ShrinkPending));
        engine.tick(800.0);
        assert_eq!(engine.phase(id), Some(Phase::Shrinking));
        assert_eq!(engine.pending_timers(), 0);

        run(&mut engine, 800.0, 800.0 + 1500.0 + FRAME_MS);
        assert_eq!(engine.phase(id), Some(Phase::Idle));
        assert_eq!(engine.scale(id), Some(1.2));
    }

    #[test]
    fn test_disengage_while_shrinking_changes_nothing() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);
        engine.disengage(id, 0, 500.0);
        run(&mut engine, 500.0, 700.0);
        assert_eq!(engine.phase(id), Some(Phase::Shrinking));

        let segment = engine.line(id).unwrap().segment();
        engine.disengage(id, 300, 710.0);
        assert_eq!(engine.phase(id), Some(Phase::Shrinking));
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.line(id).unwrap().segment(), segment);
    }

    #[test]
    fn test_redundant_inputs_are_noops() {
        let mut engine = engine();
        let id = first(&engine);

        engine.disengage(id, 0, 0.0);
        assert_eq!(engine.phase(id), Some(Phase::Idle));
        assert_eq!(engine.pending_timers(), 0);

        engine.engage(id, 0.0);
        run(&mut engine, 0.0, 500.0);
        engine.engage(id, 510.0);
        assert_eq!(engine.phase(id), Some(Phase::Grown));
        assert_eq!(engine.pending_frames(), 0);
    }

    #[test]
    fn test_scale_never_leaves_bounds() {
        let mut engine = engine();
        let ids: Vec<LineId> = engine.line_ids().iter().take(4).copied().collect();
        let mut now = 0.0;
        for step in 0..400u32 {
            for (i, &id) in ids.iter().enumerate() {
                match (step + i as u32 * 7) % 23 {
                    0 => engine.engage(id, now),
                    11 => engine.disengage(id, u64::from(step % 3) * 100, now),
                    _ => {}
                }
            }
            engine.tick(now);
            for &id in &ids {
                let s = engine.scale(id).unwrap();
                assert!((1.2..=10.0).contains(&s), "scale {s} at {now}");
            }
            now += FRAME_MS;
        }
    }

    #[test]
    fn test_repopulate_leaves_no_orphaned_work() {
        let mut engine = engine();
        let ids: Vec<LineId> = engine.line_ids().to_vec();
        engine.engage(ids[0], 0.0);
        engine.engage(ids[1], 0.0);
        run(&mut engine, 0.0, 500.0);
        engine.disengage(ids[1], 1000, 500.0);
        engine.engage(ids[2], 500.0);
        engine.tick(520.0);
        assert!(engine.pending_frames() > 0);
        assert!(engine.pending_timers() > 0);

        engine.populate(Viewport::new(20, 10)).unwrap();
        assert_eq!(engine.pending_frames(), 0);
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.phase(ids[0]), None);
        for (_, line) in engine.lines() {
            assert_eq!(line.scale(), 1.2);
            assert_eq!(line.phase(), Phase::Idle);
        }

        run(&mut engine, 520.0, 3000.0);
        assert!(engine.lines().all(|(_, l)| l.scale() == 1.2));
    }

    #[test]
    fn test_stale_ids_are_ignored() {
        let mut engine = engine();
        let old = first(&engine);
        engine.populate(Viewport::new(20, 10)).unwrap();

        engine.engage(old, 0.0);
        engine.disengage(old, 0, 0.0);
        assert_eq!(engine.pending_frames(), 0);
        assert_eq!(engine.pending_timers(), 0);
    }

    #[test]
    fn test_resize_burst_collapses_to_one_repopulation() {
        let mut engine = engine();
        let start = engine.generation();

        engine.request_repopulate(Viewport::new(30, 10), 0.0);
        engine.request_repopulate(Viewport::new(40, 10), 100.0);
        engine.request_repopulate(Viewport::new(10, 4), 150.0);
        assert_eq!(engine.pending_timers(), 1);

        engine.tick(300.0);
        assert_eq!(engine.generation(), start);

        engine.tick(350.0);
        assert_eq!(engine.generation(), start + 1);
        assert_eq!(engine.len(), 10);
        assert_eq!(engine.pending_timers(), 0);
    }

    #[test]
    fn test_layout_error_leaves_empty_grid() {
        let mut engine = engine();
        let id = first(&engine);
        engine.engage(id, 0.0);

        engine.set_grid_config(GridConfig {
            policy: CellPolicy::Track {
                rows: "minmax(auto, 1fr)".into(),
                columns: "2px".into(),
            },
            breakpoint: Breakpoint::DISABLED,
        });
        let err = engine.populate(Viewport::new(20, 10)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MalformedTrack {
                axis: Axis::Rows,
                ..
            }
        ));
        assert!(engine.is_empty());
        assert_eq!(engine.last_error(), Some(&err));
        assert_eq!(engine.pending_frames(), 0);

        engine.set_grid_config(GridConfig::default());
        engine.populate(Viewport::new(80, 10)).unwrap();
        assert!(engine.last_error().is_none());
        assert!(!engine.is_empty());
    }

    #[test]
    fn test_failed_resize_repopulation_keeps_error() {
        let mut engine = engine();
        let start = engine.generation();
        engine.set_grid_config(GridConfig {
            policy: CellPolicy::Fixed {
                row_height: 0,
                col_width: 2,
            },
            breakpoint: Breakpoint::DISABLED,
        });

        engine.request_repopulate(Viewport::new(30, 10), 0.0);
        engine.tick(250.0);
        assert_eq!(engine.generation(), start + 1);
        assert!(engine.is_empty());
        assert!(matches!(
            engine.last_error(),
            Some(LayoutError::InvalidCellSize {
                axis: Axis::Rows,
                ..
            })
        ));
        assert_eq!(engine.pending_timers(), 0);
    }
}
