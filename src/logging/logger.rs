//! Console logger with per-file check collection and a run summary.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::STAGE_TARGET;
use super::types::{CheckEntry, CheckStatus};
use super::utils::log_file_path;

/// Structured logger used by command handlers.
///
/// All messages are also written to a persistent log file at
/// `$XDG_CACHE_HOME/moose-devtools/<command>.log` by the file layer
/// installed in [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug)]
pub struct Logger {
    checks: Mutex<Vec<CheckEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Stores the log file path for display in the run summary; this
    /// constructor does not write to the file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            checks: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return a clone of all recorded checks.
    #[must_use]
    pub fn checks(&self) -> Vec<CheckEntry> {
        self.checks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a check result for the summary.
    pub fn record_check(&self, name: &str, status: CheckStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.checks.lock() {
            guard.push(CheckEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.checks.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|c| c.status == CheckStatus::Failed)
                .count()
        })
    }

    /// Print the summary of all recorded checks.
    pub fn print_summary(&self) {
        let checks = self.checks();
        if checks.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0u32;
        let mut failed = 0u32;

        for check in &checks {
            let (icon, color) = match check.status {
                CheckStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                CheckStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = check
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", check.name));
        }

        self.info(&format!(
            "{} files: \x1b[32m{ok} ok\x1b[0m, \x1b[31m{failed} failed\x1b[0m",
            ok + failed
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}
