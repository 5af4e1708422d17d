//! File logger.
//!
//! The terminal belongs to the picker while it runs, so diagnostics go to
//! `~/.wheeldate/logs/wheeldate_<timestamp>.log` (or `$WHEELDATE_LOG_DIR`).
//! Every helper is a silent no-op until [`init`] succeeds.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Directory new log files are created in.
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("WHEELDATE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wheeldate")
        .join("logs")
}

/// Open a fresh log file for this run and return its path.
pub fn init() -> std::io::Result<PathBuf> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("wheeldate_{}.log", stamp));
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    log("=== wheeldate started ===");

    Ok(path)
}

fn format_line(at: DateTime<Local>, msg: &str) -> String {
    format!("[{}] {}\n", at.format("%H:%M:%S%.3f"), msg)
}

pub fn log(msg: &str) {
    let line = format_line(Local::now(), msg);
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Picker state transitions and host input.
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Record panics in the log file before the default hook prints them.
///
/// Raw mode swallows most of what a panic writes to stderr.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log(&format!("[PANIC] {}", info));
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let at = Local.with_ymd_and_hms(2024, 2, 29, 9, 5, 7).unwrap();
        assert_eq!(
            format_line(at, "picker closed"),
            "[09:05:07.000] picker closed\n"
        );
    }

    #[test]
    fn test_log_before_init_is_noop() {
        // Must not panic or create anything
        log_event("nothing listening");
    }
}
