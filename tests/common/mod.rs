// Shared helpers for integration tests.
//
// Provides a temporary test directory and a fluent builder so each
// integration test can lay out outputs, gold files and spec files without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated test directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestDir {
    /// Temporary directory the test runs in.
    pub root: tempfile::TempDir,
}

impl TestDir {
    /// Create an empty test directory with an empty `gold/` subdirectory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("gold")).expect("create gold dir");
        Self { root }
    }

    /// Path to the test directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `rel` inside the test directory.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Read `rel` as a string.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).expect("read file")
    }
}

/// Fluent builder for [`TestDir`].
pub struct TestDirBuilder {
    dir: TestDir,
}

impl TestDirBuilder {
    /// Begin building a new test directory.
    pub fn new() -> Self {
        Self { dir: TestDir::new() }
    }

    /// Write `content` to `rel` inside the test directory, creating parents.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Write a produced output file and its gold copy.
    pub fn with_output_and_gold(self, rel: &str, output: &str, gold: &str) -> Self {
        self.with_file(rel, output)
            .with_file(&format!("gold/{rel}"), gold)
    }

    /// Finish building and return the configured directory.
    pub fn build(self) -> TestDir {
        self.dir
    }
}
