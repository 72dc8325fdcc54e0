//! Build-time resource file: registered apps and `key=value` attributes.
//!
//! A build step invokes the writer with the source path followed by the
//! compiler flags and arguments it was configured with. The derived record
//! is written as YAML to a hidden sibling of the source path
//! (`dir/app` → `dir/.app`), fully replacing any previous contents.
pub mod apps;
pub mod keyvalue;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ResourceError;

/// Key under which the registered apps are recorded.
pub const REGISTERED_APPS: &str = "registered_apps";

/// A single value in the resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResourceValue {
    /// A coerced boolean token.
    Bool(bool),
    /// A literal that is not a recognised boolean.
    Text(String),
    /// A sorted list of identifiers.
    List(Vec<String>),
}

/// The merged mapping written to the resource file.
pub type ResourceRecord = BTreeMap<String, ResourceValue>;

/// One stage of record derivation.
type Part = fn(&[String]) -> ResourceRecord;

/// Derivation stages, in precedence order: on a key collision the earlier
/// stage keeps its value.
const PARTS: &[(&str, Part)] = &[
    ("registered apps", registered_apps_part as Part),
    ("key values", keyvalue::parse_key_values as Part),
];

fn registered_apps_part(tokens: &[String]) -> ResourceRecord {
    let apps = apps::derive_registered_apps(tokens).into_iter().collect();
    BTreeMap::from([(REGISTERED_APPS.to_string(), ResourceValue::List(apps))])
}

/// Run every derivation stage over `tokens` and merge the results.
///
/// `tokens[0]` must be the source path.
///
/// # Errors
///
/// Returns [`ResourceError::MissingSourcePath`] if `tokens` is empty.
pub fn build_record(tokens: &[String]) -> Result<ResourceRecord, ResourceError> {
    if tokens.is_empty() {
        return Err(ResourceError::MissingSourcePath);
    }
    let mut record = ResourceRecord::new();
    for (name, part) in PARTS {
        let derived = part(tokens);
        tracing::debug!("{name}: {} entries", derived.len());
        for (key, value) in derived {
            record.entry(key).or_insert(value);
        }
    }
    Ok(record)
}

/// Return the hidden sibling path of `source`: `dir/name` → `dir/.name`.
#[must_use]
pub fn output_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!(".{name}"))
}

/// Serialize `record` as block-style YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(record: &ResourceRecord) -> Result<String, ResourceError> {
    Ok(serde_yaml::to_string(record)?)
}

/// Overwrite `path` with the YAML rendering of `record`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_record(record: &ResourceRecord, path: &Path) -> Result<(), ResourceError> {
    let contents = render(record)?;
    for line in contents.lines() {
        tracing::debug!("{line}");
    }
    std::fs::write(path, contents).map_err(|source| ResourceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the record for `tokens` and write it next to the source path.
///
/// Returns the path of the written resource file.
///
/// # Errors
///
/// Returns an error if `tokens` is empty or the file cannot be written.
pub fn write(tokens: &[String]) -> Result<PathBuf, ResourceError> {
    let record = build_record(tokens)?;
    let source = tokens.first().ok_or(ResourceError::MissingSourcePath)?;
    let path = output_path(Path::new(source));
    write_record(&record, &path)?;
    Ok(path)
}
