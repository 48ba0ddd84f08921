use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "WORDMATCH_LOG";

/// Game events at info, dependencies only when they warn. `RUST_LOG` replaces this.
pub const DEFAULT_DIRECTIVES: &str = "warn,wordmatch=info";

/// `{base}.{started_at}.{pid}`, so two games never share a log file.
pub fn log_file_path(base: &Path, started_at: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{started_at}.{pid}"));
    PathBuf::from(name)
}

/// Send tracing output to a file when `WORDMATCH_LOG` is set.
///
/// The terminal belongs to the board, so nothing is ever written to
/// stdout or stderr. Returns the file actually opened.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let started_at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(Path::new(&base), started_at, std::process::id());

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return None;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
        .init();
    Some(path)
}
