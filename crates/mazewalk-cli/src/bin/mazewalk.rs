//! Command-line maze game.
//!
//! This is the main entry point for the `mazewalk` terminal application.

use std::process;

use clap::Parser as _;
use mazewalk_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = mazewalk_cli::run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
