//! File logging for vista.
//!
//! The TUI owns the terminal, so diagnostics go to `~/.vista/vista.log`
//! instead of stderr. Four levels: ERROR, WARN, INFO, DEBUG. The file is
//! truncated at startup and DEBUG is enabled with `--debug` or
//! `VISTA_DEBUG=1`. Logging failures are swallowed: a missing home directory
//! or unwritable file must never take the page down.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static MAX_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Severity of a log line. Lower discriminant is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

/// Initialize the log file and pick the level cutoff.
pub fn init_with_debug(debug: bool) {
    let env_debug = std::env::var("VISTA_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let max = if debug || env_debug {
        Level::Debug
    } else {
        Level::Info
    };
    MAX_LEVEL.store(max as u8, Ordering::SeqCst);

    if let Some(vista_dir) = dirs::home_dir().map(|h| h.join(".vista")) {
        let _ = std::fs::create_dir_all(&vista_dir);
        let path = vista_dir.join("vista.log");
        // Truncate file on startup
        let _ = std::fs::write(&path, "");
        LOG_PATH.set(path).ok();
    }
}

fn enabled(level: Level) -> bool {
    level as u8 <= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Append one line at the given level, if the level is enabled and a log
/// file was set up.
pub fn write(level: Level, msg: &str) {
    if !enabled(level) {
        return;
    }
    let Some(path) = LOG_PATH.get() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.tag(), msg);
    }
}

/// Log macro for INFO level.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Log macro for ERROR level.
#[macro_export]
macro_rules! vlog_error {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Error, &format!($($arg)*))
    };
}

/// Log macro for WARN level.
#[macro_export]
macro_rules! vlog_warn {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Log macro for DEBUG level (only written when debug mode is enabled).
#[macro_export]
macro_rules! vlog_debug {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Debug, &format!($($arg)*))
    };
}
