//! treehash CLI Binary
//!
//! Prints the Merkle digest of a directory tree.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treehash::cli::{map_error, resolve_config, Cli, RunContext};
use treehash::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(2);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %config.root.display(), "treehash starting");

    let context = RunContext::new(config);
    match context.execute() {
        Ok(digest) => println!("{}", digest),
        Err(e) => {
            error!("Digest failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
