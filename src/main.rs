//! bundle-order - group feature bundles by start order
//!
//! A command line tool that reads a feature descriptor and shows in which
//! order its bundles are started.

use bundle_order::cli::{Cli, Commands};
use bundle_order::commands;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    bundle_order::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Group(args) => commands::group::run(cli.descriptor, args),
        Commands::List(args) => commands::list::run(cli.descriptor, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
