//! Build and test tooling for a simulation framework.
//!
//! Two independent utilities:
//!
//! - **[`resource`]** — derive registered apps and `key=value` attributes
//!   from build flags and write them to a hidden YAML resource file
//! - **[`differ`]** — compare JSON test output against gold files, with
//!   ignored keys and numeric tolerances
//!
//! Supporting layers: [`cli`] and [`commands`] for the binaries, [`config`]
//! for TOML test specs, [`fs`] for pre-run cleanup, [`error`] for typed
//! errors and [`logging`] for console and file output.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod differ;
pub mod error;
pub mod fs;
pub mod logging;
pub mod resource;
