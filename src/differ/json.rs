//! The JSON differ.
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::SchemaDiff;
use super::params::{JsonDiffParams, SchemaDiffParams};
use crate::error::DiffError;

/// Compares JSON output files against gold copies.
#[derive(Debug, Clone)]
pub struct JsonDiff {
    name: String,
    jsondiff: Vec<PathBuf>,
    params: SchemaDiffParams,
}

impl JsonDiff {
    /// Build a differ for test `name`, resolving `jsondiff` and the
    /// deprecated `skip_keys` into the generic parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, params: JsonDiffParams) -> Self {
        let jsondiff = params.jsondiff.clone();
        Self {
            name: name.into(),
            jsondiff,
            params: params.into_schema_params(),
        }
    }

    /// The JSON files this differ compares.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.jsondiff
    }

    /// Pre-run hook: when `delete_output_before_running` is set, remove the
    /// listed JSON files from `test_dir` so stale output cannot pass.
    ///
    /// Returns the number of files removed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing output cannot be removed.
    pub fn prepare(&self, test_dir: &Path) -> Result<usize, DiffError> {
        if !self.params.delete_output_before_running {
            return Ok(0);
        }
        let removed = crate::fs::delete_files_and_folders(test_dir, &self.jsondiff)?;
        tracing::debug!("{}: removed {removed} previous output(s)", self.name);
        Ok(removed)
    }
}

impl SchemaDiff for JsonDiff {
    fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> &SchemaDiffParams {
        &self.params
    }

    fn load_file(&self, path: &Path) -> Result<Value, DiffError> {
        let content = std::fs::read_to_string(path).map_err(|source| DiffError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DiffError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
