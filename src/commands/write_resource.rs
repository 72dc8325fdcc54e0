//! The `write-resource` command.
use anyhow::{Context as _, Result};

use crate::cli::ResourceOpts;
use crate::logging::Logger;
use crate::resource;

/// Derive the resource record for `opts` and write it next to the source.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or the resource file
/// cannot be written.
pub fn run(opts: &ResourceOpts, log: &Logger) -> Result<()> {
    log.stage("Writing resource file");
    log.debug(&format!("{} token(s)", opts.tokens.len()));
    let path = resource::write(&opts.input())
        .with_context(|| format!("writing resource file for {}", opts.source_path))?;
    log.info(&format!("wrote {}", path.display()));
    Ok(())
}
