#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the resource-file writer.
//!
//! These tests exercise both the library API and the `write-dotresource`
//! binary against isolated temporary directories, verifying that:
//! - enabled-feature flags and the source name become registered apps
//! - `key=value` arguments are recorded with boolean coercion
//! - each run fully replaces the previous resource file
//! - an unwritable destination makes the process fail

mod common;

use std::process::Command;

use moose_devtools::resource::{self, REGISTERED_APPS, ResourceValue};

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ---------------------------------------------------------------------------
// Library API
// ---------------------------------------------------------------------------

/// Every `-D<NAME>_ENABLED` flag contributes `<NAME>APP`.
#[test]
fn enabled_flags_are_registered() {
    let record = resource::build_record(&tokens(&[
        "lib/combined",
        "-DCHEMICAL_REACTIONS_ENABLED",
        "-DFLUID_PROPERTIES_ENABLED",
        "-O2",
    ]))
    .unwrap();

    assert_eq!(
        record[REGISTERED_APPS],
        ResourceValue::List(tokens(&[
            "CHEMICAL_REACTIONSAPP",
            "COMBINEDAPP",
            "COMBINEDTESTAPP",
            "FLUID_PROPERTIESAPP",
        ]))
    );
}

/// Boolean-looking values become booleans in any case; other words stay text.
#[test]
fn key_values_are_coerced() {
    let record =
        resource::build_record(&tokens(&["app", "a=TRUE", "b=False", "c=banana", "d=1"])).unwrap();
    assert_eq!(record["a"], ResourceValue::Bool(true));
    assert_eq!(record["b"], ResourceValue::Bool(false));
    assert_eq!(record["c"], ResourceValue::Text("banana".to_string()));
    assert_eq!(record["d"], ResourceValue::Bool(true));
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

/// The standalone binary writes `.<name>` next to the source path.
#[test]
fn binary_writes_hidden_resource_file() {
    let dir = common::TestDir::new();
    let source = dir.join("heat_conduction");

    let status = Command::new(env!("CARGO_BIN_EXE_write-dotresource"))
        .arg(&source)
        .args(["-DSOLID_MECHANICS_ENABLED", "installed=no", "method=opt"])
        .env("XDG_CACHE_HOME", dir.path())
        .status()
        .expect("run write-dotresource");
    assert!(status.success());

    insta::assert_snapshot!("heat_conduction_resource", dir.read(".heat_conduction"));
}

/// A second run with different input replaces the file rather than merging.
#[test]
fn binary_overwrites_previous_resource_file() {
    let dir = common::TestDir::new();
    let source = dir.join("app");

    for arg in ["first=yes", "second=no"] {
        let status = Command::new(env!("CARGO_BIN_EXE_write-dotresource"))
            .arg(&source)
            .arg(arg)
            .env("XDG_CACHE_HOME", dir.path())
            .status()
            .expect("run write-dotresource");
        assert!(status.success());
    }

    let content = dir.read(".app");
    assert!(content.contains("second: false"));
    assert!(!content.contains("first"));
}

/// The subcommand form behaves the same as the standalone binary.
#[test]
fn subcommand_writes_resource_file() {
    let dir = common::TestDir::new();
    let status = Command::new(env!("CARGO_BIN_EXE_moose-devtools"))
        .arg("write-resource")
        .arg(dir.join("solver"))
        .arg("-DPOROUS_FLOW_ENABLED")
        .env("XDG_CACHE_HOME", dir.path())
        .status()
        .expect("run moose-devtools");
    assert!(status.success());
    assert!(dir.read(".solver").contains("- POROUS_FLOWAPP"));
}

/// Writing into a missing directory exits with a failure status.
#[test]
fn binary_fails_for_unwritable_destination() {
    let dir = common::TestDir::new();
    let output = Command::new(env!("CARGO_BIN_EXE_write-dotresource"))
        .arg(dir.join("missing/dir/app"))
        .env("XDG_CACHE_HOME", dir.path())
        .output()
        .expect("run write-dotresource");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write resource file"));
}

/// Omitting the source path is a usage error.
#[test]
fn binary_requires_source_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_write-dotresource"))
        .output()
        .expect("run write-dotresource");
    assert!(!output.status.success());
}
