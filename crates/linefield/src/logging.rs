//! File logging. The terminal belongs to the UI, so traces go to
//! `<data_local_dir>/linefield/linefield.log`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LINEFIELD_LOG=debug`.
const LOG_ENV: &str = "LINEFIELD_LOG";

/// Install the global subscriber. Does nothing if the log file cannot be opened.
pub fn init() {
    let Some(dirs) = ProjectDirs::from("", "", "linefield") else {
        return;
    };
    let dir = dirs.data_local_dir();
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("linefield.log"))
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
