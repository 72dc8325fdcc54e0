//! Registered-app discovery from `-D<NAME>_ENABLED` flags and the source name.
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static ENABLED_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-D(\w+)_ENABLED").unwrap());

/// Derive the app name stem from the basename of `source`.
///
/// Underscores and hyphens are removed and the result is uppercased, so
/// `my_app-test` becomes `MYAPPTEST`. A path without a basename yields an
/// empty stem.
#[must_use]
pub fn app_stem(source: &str) -> String {
    let base = Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// Collect the registered apps for a build invocation.
///
/// `tokens[0]` is the source path; every token (including the source path)
/// is concatenated without separators and scanned for `-D<NAME>_ENABLED`,
/// each hit contributing `<NAME>APP`. The source stem contributes
/// `<STEM>APP` and `<STEM without "TEST">TESTAPP`.
#[must_use]
pub fn derive_registered_apps(tokens: &[String]) -> BTreeSet<String> {
    let joined = tokens.concat();
    let mut apps: BTreeSet<String> = ENABLED_FLAG
        .captures_iter(&joined)
        .map(|caps| {
            let (_, [name]) = caps.extract();
            format!("{}APP", name.to_uppercase())
        })
        .collect();

    if let Some(source) = tokens.first() {
        let stem = app_stem(source);
        // Strips every "TEST" occurrence, not only a trailing one.
        let test_app = format!("{}TESTAPP", stem.replace("TEST", ""));
        apps.insert(format!("{stem}APP"));
        apps.insert(test_app);
    }

    tracing::debug!("registered apps: {}", apps.iter().cloned().collect::<Vec<_>>().join(", "));
    apps
}
