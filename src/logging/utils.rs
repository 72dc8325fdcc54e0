//! Log file location, colour-code stripping, and timestamps.
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// CSI escape sequences: `ESC [`, parameter and intermediate bytes, one
/// final byte in `@`..`~`.
#[allow(clippy::unwrap_used)]
static CSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").unwrap());

/// Remove terminal colour and control sequences from `s`.
pub(super) fn strip_ansi(s: &str) -> String {
    CSI.replace_all(s, "").into_owned()
}

/// `$XDG_CACHE_HOME/moose-devtools/<command>.log`, falling back to
/// `$HOME/.cache`. The directory is created on demand.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))?;
    let dir = base.join("moose-devtools");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

/// Current UTC time rendered with the `chrono` format string `fmt`.
pub(super) fn utc_now(fmt: &str) -> String {
    chrono::Utc::now().format(fmt).to_string()
}
