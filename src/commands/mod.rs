//! Top-level subcommand orchestration (`write-resource`, `jsondiff`, `version`).
pub mod jsondiff;
pub mod version;
pub mod write_resource;
