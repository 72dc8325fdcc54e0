//! TOML test spec parsing.
//!
//! A spec file holds one table per test; each table is that test's differ
//! parameter block:
//!
//! ```toml
//! [energy_balance]
//! jsondiff = ["energy_out.json"]
//! ignored_items = ["time"]
//! delete_output_before_running = true
//! ```
use std::collections::BTreeMap;
use std::path::Path;

use crate::differ::{JsonDiffParams, ParamSpec};
use crate::error::ConfigError;

/// Read and parse a spec file into its per-test tables.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_spec(path: &Path) -> Result<BTreeMap<String, toml::Table>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::InvalidSyntax {
        file: path.display().to_string(),
        message: e.message().to_string(),
    })
}

/// Check `table` against the declared parameters: every required
/// parameter must be present.
///
/// # Errors
///
/// Returns [`ConfigError::MissingParameter`] naming the first absent
/// required parameter.
pub fn check_declared(table: &toml::Table, declared: &[ParamSpec]) -> Result<(), ConfigError> {
    for spec in declared {
        if spec.required && !table.contains_key(spec.name) {
            return Err(ConfigError::MissingParameter(spec.name.to_string()));
        }
    }
    Ok(())
}

/// Load the JSON differ parameters of test `test` from the spec at `path`.
///
/// # Errors
///
/// Returns an error if the spec cannot be loaded, the test is not defined,
/// a required parameter is missing, or a value has the wrong type.
pub fn load_json_diff(path: &Path, test: &str) -> Result<JsonDiffParams, ConfigError> {
    let mut spec = load_spec(path)?;
    let table = spec
        .remove(test)
        .ok_or_else(|| ConfigError::MissingParameter(format!("[{test}]")))?;
    check_declared(&table, &JsonDiffParams::declared())?;
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::InvalidSyntax {
            file: path.display().to_string(),
            message: format!("[{test}]: {}", e.message()),
        })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tests.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_named_test() {
        let (_dir, path) = spec_file(
            "[a]\njsondiff = [\"a.json\"]\n\n[b]\njsondiff = [\"b.json\"]\nskip_keys = [\"t\"]\n",
        );
        let params = load_json_diff(&path, "b").unwrap();
        assert_eq!(params.jsondiff, vec![PathBuf::from("b.json")]);
        assert_eq!(params.skip_keys, vec!["t"]);
    }

    #[test]
    fn skip_keys_deprecation_is_logged_once() {
        let (_log, tmp, guard) = crate::logging::isolated_logger();
        let (_dir, path) = spec_file("[a]\njsondiff = [\"a.json\"]\nskip_keys = [\"t\"]\n");
        let params = load_json_diff(&path, "a").unwrap();
        let _differ = crate::differ::JsonDiff::new("a", params);
        drop(guard);

        let content =
            std::fs::read_to_string(tmp.path().join("moose-devtools").join("test.log")).unwrap();
        assert_eq!(content.matches("deprecated").count(), 1);
    }

    #[test]
    fn unknown_test_is_reported() {
        let (_dir, path) = spec_file("[a]\njsondiff = []\n");
        let err = load_json_diff(&path, "zzz").unwrap_err();
        assert!(matches!(err, ConfigError::MissingParameter(ref name) if name == "[zzz]"));
    }

    #[test]
    fn missing_required_parameter_is_reported() {
        let (_dir, path) = spec_file("[a]\nignored_items = [\"x\"]\n");
        let err = load_json_diff(&path, "a").unwrap_err();
        assert!(matches!(err, ConfigError::MissingParameter(ref name) if name == "jsondiff"));
    }

    #[test]
    fn wrong_type_is_a_syntax_error() {
        let (_dir, path) = spec_file("[a]\njsondiff = [\"a.json\"]\nrel_err = \"big\"\n");
        let err = load_json_diff(&path, "a").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSyntax { .. }));
    }

    #[test]
    fn invalid_toml_is_a_syntax_error() {
        let (_dir, path) = spec_file("[a\njsondiff = ");
        assert!(matches!(
            load_spec(&path),
            Err(ConfigError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_spec(&dir.path().join("absent.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
