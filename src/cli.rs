//! Command-line argument model.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI entry point for the build and test tooling.
#[derive(Parser, Debug)]
#[command(
    name = "moose-devtools",
    about = "Build-resource writer and JSON gold-file differ",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (must precede the subcommand so `-v` stays a
    /// compiler token for `write-resource`)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Standalone entry point invoked by the build system as
/// `write-dotresource <source_path> [token ...]`.
#[derive(Parser, Debug)]
#[command(
    name = "write-dotresource",
    about = "Write the hidden build-resource file next to a source path",
    disable_help_flag = true
)]
pub struct WriteDotresourceCli {
    /// Source path and tokens.
    #[command(flatten)]
    pub opts: ResourceOpts,

    /// Print help (long form only, so short compiler flags pass through)
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the hidden resource file for a build target
    WriteResource(ResourceOpts),
    /// Compare JSON output files against gold copies
    Jsondiff(JsonDiffOpts),
    /// Print version information
    Version,
}

/// Options for the `write-resource` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ResourceOpts {
    /// Source path; the resource file is written next to it as `.<name>`
    pub source_path: String,

    /// Compiler flags and key=value arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl ResourceOpts {
    /// The full input list: source path followed by every token.
    #[must_use]
    pub fn input(&self) -> Vec<String> {
        std::iter::once(self.source_path.clone())
            .chain(self.tokens.iter().cloned())
            .collect()
    }
}

/// Options for the `jsondiff` subcommand.
#[derive(Args, Debug, Clone)]
pub struct JsonDiffOpts {
    /// Directory the test runs in; outputs and the gold directory live here
    #[arg(long, default_value = ".")]
    pub test_dir: PathBuf,

    /// Test name used in log output
    #[arg(long, default_value = "jsondiff")]
    pub name: String,

    /// Read parameters from this TOML test spec instead of flags
    #[arg(long, requires = "test", conflicts_with_all = ["files", "ignored_items", "skip_keys", "gold_dir", "rel_err", "abs_zero", "delete_output_before_running"])]
    pub spec: Option<PathBuf>,

    /// Test block to read from the spec
    #[arg(long, requires = "spec")]
    pub test: Option<String>,

    /// Only run the pre-run cleanup, then exit
    #[arg(long)]
    pub prepare_only: bool,

    /// Gold directory, relative to the test directory
    #[arg(long)]
    pub gold_dir: Option<PathBuf>,

    /// JSON keys to ignore at any depth
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignored_items: Vec<String>,

    /// Deprecated alias of --ignore
    #[arg(long = "skip-key", value_delimiter = ',')]
    pub skip_keys: Vec<String>,

    /// Relative tolerance for numeric values
    #[arg(long)]
    pub rel_err: Option<f64>,

    /// Magnitude below which numbers are treated as zero
    #[arg(long)]
    pub abs_zero: Option<f64>,

    /// Delete the listed outputs before comparing
    #[arg(long)]
    pub delete_output_before_running: bool,

    /// JSON files to compare, relative to the test directory
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
        WriteDotresourceCli::command().debug_assert();
    }

    #[test]
    fn standalone_writer_accepts_leading_flag_tokens() {
        let cli = WriteDotresourceCli::parse_from([
            "write-dotresource",
            "/build/lib/heat",
            "-DSOLID_ENABLED",
            "debug=no",
        ]);
        assert_eq!(
            cli.opts.input(),
            vec!["/build/lib/heat", "-DSOLID_ENABLED", "debug=no"]
        );
    }

    #[test]
    fn parse_write_resource_with_compiler_flags() {
        let cli = Cli::parse_from([
            "moose-devtools",
            "write-resource",
            "lib/heat",
            "-DFLUID_ENABLED",
            "-O2",
            "method=opt",
        ]);
        let Command::WriteResource(opts) = cli.command else {
            panic!("expected write-resource");
        };
        assert_eq!(opts.source_path, "lib/heat");
        assert_eq!(opts.tokens, vec!["-DFLUID_ENABLED", "-O2", "method=opt"]);
        assert_eq!(opts.input()[0], "lib/heat");
        assert_eq!(opts.input().len(), 4);
    }

    #[test]
    fn write_resource_keeps_short_v_as_token() {
        let cli = Cli::parse_from([
            "moose-devtools",
            "write-resource",
            "lib/heat",
            "-v",
            "-DFOO_ENABLED",
        ]);
        assert!(!cli.verbose);
        let Command::WriteResource(opts) = cli.command else {
            panic!("expected write-resource");
        };
        assert_eq!(opts.tokens, vec!["-v", "-DFOO_ENABLED"]);
    }

    #[test]
    fn parse_jsondiff_flags() {
        let cli = Cli::parse_from([
            "moose-devtools",
            "jsondiff",
            "--test-dir",
            "/tmp/t",
            "--ignore",
            "time,host",
            "--skip-key",
            "stamp",
            "--delete-output-before-running",
            "a.json",
            "b.json",
        ]);
        let Command::Jsondiff(opts) = cli.command else {
            panic!("expected jsondiff");
        };
        assert_eq!(opts.test_dir, PathBuf::from("/tmp/t"));
        assert_eq!(opts.ignored_items, vec!["time", "host"]);
        assert_eq!(opts.skip_keys, vec!["stamp"]);
        assert!(opts.delete_output_before_running);
        assert_eq!(opts.files.len(), 2);
    }

    #[test]
    fn spec_requires_test() {
        let result = Cli::try_parse_from(["moose-devtools", "jsondiff", "--spec", "tests.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn spec_conflicts_with_files() {
        let result = Cli::try_parse_from([
            "moose-devtools",
            "jsondiff",
            "--spec",
            "tests.toml",
            "--test",
            "a",
            "out.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_version_and_verbose() {
        let cli = Cli::parse_from(["moose-devtools", "-v", "version"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Version));
    }
}
