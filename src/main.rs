use clap::Parser;
use dotwalk::cli::{self, Cli};
use std::process;

/// A small CLI to query, tombstone-delete and prune JSON documents.
fn main() {
    env_logger::init();

    let args = Cli::parse();
    match cli::run(&args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
