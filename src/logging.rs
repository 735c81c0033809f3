//! Tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the local
//! data directory. Headless commands log to stderr instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive.
pub const ENV_LOG: &str = "FEEDBOARD_LOG";

const DEFAULT_DIRECTIVE: &str = "info";
const LOG_FILE_NAME: &str = "feedboard.log";

/// Filter from `FEEDBOARD_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Default log directory: `<data_local_dir>/feedboard`.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("feedboard"))
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path, or `None` when no writable location exists,
/// in which case logging stays disabled.
pub fn init_file_logging() -> Option<PathBuf> {
    let dir = default_log_dir()?;
    let (path, file) = open_log_file(&dir).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}

/// Install the global subscriber writing to stderr.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}
