//! `write-dotresource <source_path> [token ...]`: the build-step entry point
//! for writing the hidden resource file.
use anyhow::Result;
use clap::Parser;

use moose_devtools::{cli, commands, logging};

fn main() -> Result<()> {
    let args = cli::WriteDotresourceCli::parse();
    logging::init_subscriber(false, "write-resource");
    let log = logging::Logger::new("write-resource");
    commands::write_resource::run(&args.opts, &log)
}
