//! Log file setup.
//!
//! The terminal belongs to the TUI, so events go to
//! `~/.quickchat/quickchat.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// File name of the log inside the config directory.
pub const LOG_FILE_NAME: &str = "quickchat.log";

/// Build the filter from `RUST_LOG`, then the configured filter, then `info`.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Open (or create) the log file in `dir` for appending.
pub fn open_log_file(dir: &Path) -> io::Result<(fs::File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(&path)?;
    Ok((file, path))
}

/// Install the global subscriber.
///
/// Returns the log path, or `None` when no file could be opened (logging is
/// then disabled). Calling it twice keeps the first subscriber.
pub fn init_logging(config: &ClientConfig) -> Option<PathBuf> {
    let dir = ClientConfig::config_dir()?;
    let (file, path) = match open_log_file(&dir) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Warning: cannot open log file in {}: {}", dir.display(), e);
            return None;
        }
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(build_filter(&config.log_filter));

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    tracing::info!(version = crate::cli::VERSION, "quickchat starting");
    Some(path)
}
