//! Gold-file differs for structured test output.
//!
//! A differ compares files produced by a test against reference ("gold")
//! copies kept in the test's gold directory. [`SchemaDiff`] supplies the
//! format-independent part: locating gold files, applying the ignore list
//! and numeric tolerances. A format only needs to say how to load a file;
//! [`JsonDiff`] does so for JSON.
pub mod compare;
pub mod json;
pub mod params;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::DiffError;

pub use compare::{Difference, DifferenceKind, Tolerance};
pub use json::JsonDiff;
pub use params::{JsonDiffParams, ParamSpec, SchemaDiffParams};

/// Outcome of comparing one output file with its gold copy.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Output file, relative to the test directory.
    pub file: PathBuf,
    /// Every mismatch found; empty when the file matches.
    pub differences: Vec<Difference>,
}

impl FileReport {
    /// Whether the output matched its gold copy.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }
}

/// A differ over a structured file format.
pub trait SchemaDiff {
    /// Name of the test this differ belongs to.
    fn name(&self) -> &str;

    /// Resolved parameters.
    fn params(&self) -> &SchemaDiffParams;

    /// Read and parse `path` into a value tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn load_file(&self, path: &Path) -> Result<Value, DiffError>;

    /// Compare `<test_dir>/<file>` against `<test_dir>/<gold_dir>/<file>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the gold file is missing or either file fails to
    /// load.
    fn diff_file(&self, test_dir: &Path, file: &Path) -> Result<FileReport, DiffError> {
        let params = self.params();
        let gold_path = test_dir.join(&params.gold_dir).join(file);
        if !gold_path.is_file() {
            return Err(DiffError::MissingGold { path: gold_path });
        }
        let gold = self.load_file(&gold_path)?;
        let actual = self.load_file(&test_dir.join(file))?;

        let tolerance = Tolerance {
            rel_err: params.rel_err,
            abs_zero: params.abs_zero,
        };
        let differences = compare::compare(&gold, &actual, &params.ignored_items, tolerance);
        tracing::debug!(
            "{}: {} difference(s) in {}",
            self.name(),
            differences.len(),
            file.display()
        );
        Ok(FileReport {
            file: file.to_path_buf(),
            differences,
        })
    }

    /// Compare every file listed in `schemadiff`, stopping at the first
    /// file that cannot be loaded.
    ///
    /// # Errors
    ///
    /// Returns the first load or gold-lookup error encountered.
    fn diff_files(&self, test_dir: &Path) -> Result<Vec<FileReport>, DiffError> {
        self.params()
            .schemadiff
            .iter()
            .map(|file| self.diff_file(test_dir, file))
            .collect()
    }
}
