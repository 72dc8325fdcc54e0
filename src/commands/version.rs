//! Command: print version information.

/// Version string: `MOOSE_DEVTOOLS_VERSION` captured at build time, or the
/// package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("MOOSE_DEVTOOLS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the tool version to stdout.
pub fn run() {
    println!("moose-devtools {}", version());
}
