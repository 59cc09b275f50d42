//! Opt-in file logging for conversions.
//!
//! Every line lands in the debug log; `Error` lines are also copied to the
//! error log. Nothing is written until [`init`] has run.

use crate::shared::constants;
use lazy_static::lazy_static;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug)]
struct LogFiles {
    debug: PathBuf,
    error: PathBuf,
}

impl LogFiles {
    fn in_dir(dir: &Path) -> Self {
        Self {
            debug: dir.join(constants::DEBUG_LOG_FILE),
            error: dir.join(constants::ERROR_LOG_FILE),
        }
    }

    /// Truncate both files and stamp them with a session header.
    fn reset(&self) -> io::Result<()> {
        let header = format!(
            "# {} session {}",
            constants::APP_NAME,
            chrono::Local::now().to_rfc3339()
        );
        for path in [&self.debug, &self.error] {
            writeln!(File::create(path)?, "{}", header)?;
        }
        Ok(())
    }

    fn append(&self, level: Level, line: &str) {
        append_to(&self.debug, line);
        if level == Level::Error {
            append_to(&self.error, line);
        }
    }
}

fn append_to(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

lazy_static! {
    static ref SINK: Mutex<Option<LogFiles>> = Mutex::new(None);
}

/// Start logging into `dir`, replacing any earlier session's files.
///
/// Panics are recorded in the error log before the default hook runs.
pub fn init(dir: &Path) {
    let files = LogFiles::in_dir(dir);
    if let Err(e) = files.reset() {
        eprintln!("{}: logging disabled: {}", constants::APP_NAME, e);
        return;
    }
    if let Ok(mut sink) = SINK.lock() {
        *sink = Some(files.clone());
    }

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        files.append(Level::Error, &format!("panic: {}", info));
        previous(info);
    }));
}

/// Whether the environment asks for logging (`CHARPHOTO_LOG` set, not "0").
pub fn enabled_by_env() -> bool {
    std::env::var(constants::LOG_ENV_VAR)
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

pub fn log(level: Level, msg: &str) {
    let files = match SINK.lock() {
        Ok(sink) => sink.clone(),
        Err(_) => return,
    };
    if let Some(files) = files {
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        files.append(level, &format!("{} {:<5} {}", stamp, level.tag(), msg));
    }
}

pub fn info(msg: &str) {
    log(Level::Info, msg);
}

pub fn error(msg: &str) {
    log(Level::Error, msg);
}

pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_noop() {
        // must not panic or create files in the working directory
        debug("nobody is listening");
        error("still nobody");
    }

    #[test]
    fn test_error_lines_reach_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = LogFiles::in_dir(dir.path());
        files.reset().unwrap();

        files.append(Level::Debug, "resize 3us");
        files.append(Level::Error, "decode failed");

        let debug = std::fs::read_to_string(&files.debug).unwrap();
        let error = std::fs::read_to_string(&files.error).unwrap();
        assert!(debug.starts_with("# charphoto session"));
        assert!(debug.contains("resize 3us") && debug.contains("decode failed"));
        assert!(!error.contains("resize 3us"));
        assert!(error.contains("decode failed"));
    }
}
