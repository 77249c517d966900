//! File logging for kanso.
//!
//! Levels, most to least severe: ERROR, WARN, INFO, DEBUG, TRACE.
//!
//! Output goes to `~/.kanso/kanso.log`, truncated on [`init`]. Debug mode is
//! enabled with `--debug` or `KANSO_DEBUG=1`; `KANSO_LOG=<level>` picks an
//! explicit level and wins over both. Nothing is written before `init`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use crate::config::Config;
use crate::Error;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(Error::InvalidTag {
                kind: "log level",
                value: s.to_string(),
            }),
        }
    }
}

/// Initialize logging to `~/.kanso/kanso.log` at INFO unless the environment says otherwise.
pub fn init() {
    init_with_debug(false);
}

/// Initialize logging, forcing DEBUG when `debug` is set.
pub fn init_with_debug(debug: bool) {
    LOG_LEVEL.store(level_from_env(debug) as u8, Ordering::SeqCst);

    if let Ok(dir) = Config::kanso_dir() {
        let _ = std::fs::create_dir_all(&dir);
        init_file(&dir.join("kanso.log"));
    }
}

fn level_from_env(debug: bool) -> LogLevel {
    if let Some(level) = std::env::var("KANSO_LOG")
        .ok()
        .and_then(|v| v.parse::<LogLevel>().ok())
    {
        return level;
    }

    let env_debug = std::env::var("KANSO_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if debug || env_debug {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

fn init_file(path: &Path) {
    // Truncate on startup
    let _ = std::fs::write(path, "");
    LOG_PATH.set(path.to_path_buf()).ok();
}

/// Current minimum level that gets written.
pub fn get_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Write `msg` if `level` passes the current filter and a log file is set.
pub fn log_at(level: LogLevel, msg: &str) {
    if level > get_level() {
        return;
    }

    if let Some(path) = LOG_PATH.get() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.as_str(), msg);
        }
    }
}

pub fn error(msg: &str) {
    log_at(LogLevel::Error, msg);
}

pub fn warn(msg: &str) {
    log_at(LogLevel::Warn, msg);
}

pub fn info(msg: &str) {
    log_at(LogLevel::Info, msg);
}

pub fn debug(msg: &str) {
    log_at(LogLevel::Debug, msg);
}

pub fn trace(msg: &str) {
    log_at(LogLevel::Trace, msg);
}

/// INFO-level log macro.
#[macro_export]
macro_rules! klog {
    ($($arg:tt)*) => {
        $crate::log::info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::log::error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::log::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::log::debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::log::trace(&format!($($arg)*))
    };
}
