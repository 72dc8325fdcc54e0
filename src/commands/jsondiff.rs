//! The `jsondiff` command.
use anyhow::{Context as _, Result};

use crate::cli::JsonDiffOpts;
use crate::config;
use crate::differ::{JsonDiff, JsonDiffParams, SchemaDiff};
use crate::error::ConfigError;
use crate::logging::{CheckStatus, Logger};

/// Build the differ parameters from the spec file or from flags.
///
/// # Errors
///
/// Returns an error if the spec cannot be loaded or no JSON file is given.
pub fn resolve_params(opts: &JsonDiffOpts) -> Result<JsonDiffParams> {
    if let (Some(spec), Some(test)) = (&opts.spec, &opts.test) {
        return config::load_json_diff(spec, test)
            .with_context(|| format!("loading test '{test}' from {}", spec.display()));
    }

    if opts.files.is_empty() {
        return Err(ConfigError::MissingParameter("jsondiff".to_string()).into());
    }
    let mut params = JsonDiffParams::new(opts.files.clone());
    params.skip_keys.clone_from(&opts.skip_keys);
    params.base.ignored_items.clone_from(&opts.ignored_items);
    params.base.delete_output_before_running = opts.delete_output_before_running;
    if let Some(gold_dir) = &opts.gold_dir {
        params.base.gold_dir.clone_from(gold_dir);
    }
    if let Some(rel_err) = opts.rel_err {
        params.base.rel_err = rel_err;
    }
    if let Some(abs_zero) = opts.abs_zero {
        params.base.abs_zero = abs_zero;
    }
    Ok(params)
}

/// Run the pre-run cleanup and compare every listed file with its gold copy.
///
/// Every file is checked even after a failure; the command fails if any
/// file differs or cannot be loaded.
///
/// # Errors
///
/// Returns an error if parameters cannot be resolved, cleanup fails, or one
/// or more files do not match.
pub fn run(opts: &JsonDiffOpts, log: &Logger) -> Result<()> {
    let params = resolve_params(opts)?;
    let name = opts.test.as_deref().unwrap_or(&opts.name);
    let differ = JsonDiff::new(name, params);

    log.stage("Preparing test directory");
    let removed = differ
        .prepare(&opts.test_dir)
        .context("removing previous output")?;
    log.debug(&format!("removed {removed} previous output file(s)"));
    if opts.prepare_only {
        return Ok(());
    }

    log.stage(&format!("Comparing JSON output for {name}"));
    log.debug(&format!(
        "ignored items: [{}]",
        differ.params().ignored_items.join(", ")
    ));
    for file in differ.files() {
        let label = file.display().to_string();
        match differ.diff_file(&opts.test_dir, file) {
            Ok(report) if report.is_match() => {
                log.record_check(&label, CheckStatus::Ok, None);
            }
            Ok(report) => {
                for difference in &report.differences {
                    log.error(&format!("{label}: {difference}"));
                }
                let detail = format!("{} difference(s)", report.differences.len());
                log.record_check(&label, CheckStatus::Failed, Some(&detail));
            }
            Err(e) => {
                log.error(&e.to_string());
                log.record_check(&label, CheckStatus::Failed, Some("not compared"));
            }
        }
    }

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} file(s) failed comparison");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn opts(test_dir: &Path, files: &[&str]) -> JsonDiffOpts {
        JsonDiffOpts {
            test_dir: test_dir.to_path_buf(),
            name: "jsondiff".to_string(),
            spec: None,
            test: None,
            prepare_only: false,
            gold_dir: None,
            ignored_items: Vec::new(),
            skip_keys: Vec::new(),
            rel_err: None,
            abs_zero: None,
            delete_output_before_running: false,
            files: files.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn resolve_params_requires_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_params(&opts(dir.path(), &[])).is_err());
    }

    #[test]
    fn resolve_params_applies_flags() {
        let dir = tempfile::tempdir().unwrap();
        let mut o = opts(dir.path(), &["out.json"]);
        o.ignored_items = vec!["time".to_string()];
        o.skip_keys = vec!["host".to_string()];
        o.rel_err = Some(1e-3);
        let params = resolve_params(&o).unwrap();
        assert_eq!(params.base.ignored_items, vec!["time"]);
        assert_eq!(params.skip_keys, vec!["host"]);
        assert!((params.base.rel_err - 1e-3).abs() < f64::EPSILON);
    }

    #[test]
    fn matching_files_pass() {
        let (log, _tmp, _guard) = crate::logging::isolated_logger();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gold")).unwrap();
        std::fs::write(dir.path().join("out.json"), r#"{"a": [1, 2]}"#).unwrap();
        std::fs::write(dir.path().join("gold/out.json"), r#"{"a": [1, 2]}"#).unwrap();

        run(&opts(dir.path(), &["out.json"]), &log).unwrap();
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn every_file_is_checked_before_failing() {
        let (log, _tmp, _guard) = crate::logging::isolated_logger();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gold")).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{a:}").unwrap();
        std::fs::write(dir.path().join("gold/bad.json"), "{}").unwrap();
        std::fs::write(dir.path().join("good.json"), "{}").unwrap();
        std::fs::write(dir.path().join("gold/good.json"), "{}").unwrap();

        let err = run(&opts(dir.path(), &["bad.json", "good.json"]), &log).unwrap_err();
        assert!(err.to_string().contains("1 file(s) failed"));
        assert_eq!(log.checks().len(), 2);
    }
}
