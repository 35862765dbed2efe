//! File-backed tracing setup; the terminal belongs to the UI

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LOG_LEVEL_ENV;

const DEFAULT_LEVEL: &str = "info";

/// Dependencies that are chatty at debug level.
const NOISY_CRATES: &[&str] = &["reqwest", "hyper", "hyper_util", "tokio", "mio"];

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("tracing subscriber already installed")]
    AlreadyInstalled,
}

/// Filter from `POKEDEX_TUI_LOG_LEVEL`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    for krate in NOISY_CRATES {
        if let Ok(directive) = format!("{krate}=warn").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

pub fn init(log_file: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(log_file).map_err(|source| LoggingError::Open {
        path: log_file.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
