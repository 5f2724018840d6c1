use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use linefield_anim::{Engine, InputEvent, LineFieldView, Router};
use linefield_config::Config;
use linefield_core::{ColorTheme, Viewport};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Size},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::{info, warn};

/// Poll interval while lines are animating (about 60 frames per second).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest wait for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    engine: Engine,
    router: Router,
    theme: ColorTheme,
    config: Config,
    /// Config file given on the command line, if any.
    config_path: Option<PathBuf>,
    /// Viewport of the grid area, excluding the help bar.
    viewport: Viewport,
    /// One-off message shown in the help bar.
    notice: Option<String>,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let engine = Engine::new(config.animation, config.grid.clone())
            .with_resize_debounce(config.input.resize_debounce_ms);
        let router = Router::new(config.input.mode, config.input.release_delay_ms);
        Self {
            running: false,
            engine,
            router,
            theme: config.theme,
            config,
            config_path,
            viewport: Viewport::default(),
            notice: None,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.viewport = grid_viewport(terminal.size()?);
        self.repopulate_now();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.engine.tick(self.now_ms());
        }
        Ok(())
    }

    /// Milliseconds since startup.
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn repopulate_now(&mut self) {
        // A failed population leaves the error on the engine for display.
        if let Ok(layout) = self.engine.populate(self.viewport) {
            info!(rows = layout.rows, cols = layout.cols, "grid ready");
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let color = self.theme.color();
        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        if let Some(err) = self.engine.last_error() {
            let rows = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(chunks[0]);
            let message = Paragraph::new(format!("no grid: {err}"))
                .style(Style::new().red())
                .alignment(Alignment::Center);
            frame.render_widget(message, rows[1]);
        } else {
            frame.render_widget(LineFieldView::new(&self.engine, self.theme), chunks[0]);
        }

        let mut help = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "m".bold().fg(color),
            format!(" mode: {}  ", self.router.mode().label()).dark_gray(),
            "c".bold().fg(color),
            format!(" color: {}  ", self.theme.label()).dark_gray(),
            "r".bold().fg(color),
            " rebuild  ".dark_gray(),
            "s".bold().fg(color),
            " save".dark_gray(),
        ];
        if let Some(notice) = &self.notice {
            help.push(format!("  {notice}").fg(color));
        }
        frame.render_widget(Line::from(help).centered(), chunks[1]);
    }

    /// How long to wait for input before the next tick is due.
    fn poll_timeout(&self) -> Duration {
        if self.engine.is_animating() {
            return FRAME_INTERVAL;
        }
        match self.engine.next_deadline() {
            Some(deadline) => {
                let wait = (deadline - self.now_ms()).max(0.0);
                Duration::from_secs_f64(wait / 1000.0).min(IDLE_POLL)
            }
            None => IDLE_POLL,
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            let now = self.now_ms();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => {
                    if let Some(input) = to_input_event(mouse) {
                        self.router.handle(&mut self.engine, input, now);
                    }
                }
                Event::FocusLost => {
                    self.router
                        .handle(&mut self.engine, InputEvent::PointerLeft, now);
                }
                Event::Resize(width, height) => {
                    self.viewport = grid_viewport(Size::new(width, height));
                    self.engine.request_repopulate(self.viewport, now);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.cycle_input_mode(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('r')) => self.repopulate_now(),
            (_, KeyCode::Char('s')) => self.save_config(),
            _ => {}
        }
    }

    /// Cycle through the input modes.
    fn cycle_input_mode(&mut self) {
        let now = self.now_ms();
        let next = self.router.mode().next();
        self.router.set_mode(next, &mut self.engine, now);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Persist the current theme and input mode.
    fn save_config(&mut self) {
        self.config.theme = self.theme;
        self.config.input.mode = self.router.mode();
        let Some(path) = self.config_path.clone().or_else(Config::default_path) else {
            self.notice = Some("no config directory".into());
            return;
        };
        self.notice = Some(match self.config.save(&path) {
            Ok(()) => format!("saved {}", path.display()),
            Err(err) => {
                warn!(%err, "saving config failed");
                format!("save failed: {err}")
            }
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// The grid takes the whole terminal except the help bar.
fn grid_viewport(size: Size) -> Viewport {
    Viewport::new(size.width, size.height.saturating_sub(1))
}

/// Map terminal mouse input onto the router's vocabulary. Motion is hover;
/// the left button acts as a touch.
fn to_input_event(mouse: MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => Some(InputEvent::PointerMoved { x, y }),
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::TouchStart { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::TouchMove { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::TouchEnd),
        _ => None,
    }
}
