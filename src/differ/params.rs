//! Differ parameter blocks and their declarations.
//!
//! [`SchemaDiffParams`] carries what every structured-output differ needs;
//! [`JsonDiffParams`] adds the JSON-specific `jsondiff` list and the
//! deprecated `skip_keys` alias, which is folded into `ignored_items` by
//! [`JsonDiffParams::into_schema_params`].
use std::path::PathBuf;

use serde::Deserialize;

/// Default directory, relative to the test directory, holding gold files.
pub const DEFAULT_GOLD_DIR: &str = "gold";
/// Default relative tolerance for numeric comparison.
pub const DEFAULT_REL_ERR: f64 = 5.5e-6;
/// Default magnitude below which numbers are treated as zero.
pub const DEFAULT_ABS_ZERO: f64 = 1e-10;

/// Declaration of a single differ parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as it appears in a test spec.
    pub name: &'static str,
    /// Whether a test spec must provide it.
    pub required: bool,
    /// Whether the parameter is kept only for compatibility.
    pub deprecated: bool,
    /// One-line description.
    pub description: &'static str,
}

impl ParamSpec {
    const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            deprecated: false,
            description,
        }
    }
}

/// Parameters shared by all structured-output differs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaDiffParams {
    /// Files, relative to the test directory, to compare against gold.
    #[serde(default)]
    pub schemadiff: Vec<PathBuf>,
    /// Directory holding the gold files, relative to the test directory.
    #[serde(default = "default_gold_dir")]
    pub gold_dir: PathBuf,
    /// Object keys excluded from comparison at any depth.
    #[serde(default)]
    pub ignored_items: Vec<String>,
    /// Relative tolerance for numeric values.
    #[serde(default = "default_rel_err")]
    pub rel_err: f64,
    /// Numbers with magnitude below this are considered zero.
    #[serde(default = "default_abs_zero")]
    pub abs_zero: f64,
    /// Remove the listed outputs before the test runs.
    #[serde(default)]
    pub delete_output_before_running: bool,
}

fn default_gold_dir() -> PathBuf {
    PathBuf::from(DEFAULT_GOLD_DIR)
}

const fn default_rel_err() -> f64 {
    DEFAULT_REL_ERR
}

const fn default_abs_zero() -> f64 {
    DEFAULT_ABS_ZERO
}

impl Default for SchemaDiffParams {
    fn default() -> Self {
        Self {
            schemadiff: Vec::new(),
            gold_dir: default_gold_dir(),
            ignored_items: Vec::new(),
            rel_err: DEFAULT_REL_ERR,
            abs_zero: DEFAULT_ABS_ZERO,
            delete_output_before_running: false,
        }
    }
}

impl SchemaDiffParams {
    /// Parameters understood by every structured-output differ.
    #[must_use]
    pub fn declared() -> Vec<ParamSpec> {
        vec![
            ParamSpec::optional("schemadiff", "A list of files to compare."),
            ParamSpec::optional("gold_dir", "The directory where the gold files are located."),
            ParamSpec::optional(
                "ignored_items",
                "Items in the output that the differ will ignore.",
            ),
            ParamSpec::optional("rel_err", "Relative error value used in numeric comparisons."),
            ParamSpec::optional("abs_zero", "Absolute zero cutoff used in numeric comparisons."),
            ParamSpec::optional(
                "delete_output_before_running",
                "Delete the listed output files before running the test.",
            ),
        ]
    }
}

/// Parameters of the JSON differ as written in a test spec.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonDiffParams {
    /// JSON files, relative to the test directory, to compare.
    pub jsondiff: Vec<PathBuf>,
    /// Deprecated alias of `ignored_items`; appended to it on construction.
    #[serde(default)]
    pub skip_keys: Vec<String>,
    /// Inherited parameters.
    #[serde(flatten)]
    pub base: SchemaDiffParams,
}

impl JsonDiffParams {
    /// Parameters with the given `jsondiff` list and defaults elsewhere.
    #[must_use]
    pub fn new(jsondiff: Vec<PathBuf>) -> Self {
        Self {
            jsondiff,
            skip_keys: Vec::new(),
            base: SchemaDiffParams::default(),
        }
    }

    /// The inherited declarations extended with `jsondiff` and `skip_keys`.
    #[must_use]
    pub fn declared() -> Vec<ParamSpec> {
        let mut params = SchemaDiffParams::declared();
        params.push(ParamSpec {
            name: "jsondiff",
            required: true,
            deprecated: false,
            description: "A list of JSON files to compare.",
        });
        params.push(ParamSpec {
            name: "skip_keys",
            required: false,
            deprecated: true,
            description: "Deprecated. Items in the JSON that the differ will ignore. \
                          Functionally identical to ignored_items.",
        });
        params
    }

    /// Resolve into the generic parameter block.
    ///
    /// `jsondiff` becomes `schemadiff`. Compatibility shim: `skip_keys` is
    /// appended to `ignored_items` in order, without deduplication. Once
    /// test specs stop using `skip_keys` the field and this merge go away.
    #[must_use]
    pub fn into_schema_params(self) -> SchemaDiffParams {
        let Self {
            jsondiff,
            skip_keys,
            mut base,
        } = self;
        if !skip_keys.is_empty() {
            tracing::warn!("'skip_keys' is deprecated; use 'ignored_items' instead");
        }
        base.schemadiff = jsondiff;
        base.ignored_items.extend(skip_keys);
        base
    }
}
