use std::io::stdout;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use linefield_config::Config;
use linefield_core::InputMode;

mod app;
mod logging;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.input.mode = mode.into();
    }
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableMouseCapture, EnableFocusChange) {
        ratatui::restore();
        return Err(err.into());
    }
    let result = App::new(config, cli.config).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result
}

#[derive(Parser, Debug)]
#[command(author, version, about = "A terminal grid of lines that widen under the mouse", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Input mode, overriding the config file.
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,
    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Hover,
    Drag,
    Tap,
    Combined,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hover => InputMode::Hover,
            ModeArg::Drag => InputMode::Drag,
            ModeArg::Tap => InputMode::Tap,
            ModeArg::Combined => InputMode::Combined,
        }
    }
}
