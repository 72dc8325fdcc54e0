//! `moose-devtools`: build-resource writer and JSON gold-file differ.
use anyhow::Result;
use clap::Parser;

use moose_devtools::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::WriteResource(opts) => {
            logging::init_subscriber(args.verbose, "write-resource");
            let log = logging::Logger::new("write-resource");
            commands::write_resource::run(&opts, &log)
        }
        cli::Command::Jsondiff(opts) => {
            logging::init_subscriber(args.verbose, "jsondiff");
            let log = logging::Logger::new("jsondiff");
            commands::jsondiff::run(&opts, &log)
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
