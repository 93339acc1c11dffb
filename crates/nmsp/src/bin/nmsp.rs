//! `nmsp` — dotted-path lookup and deep merge for JSON documents.
//!
//! Usage:
//!   nmsp get <PATH>
//!   nmsp extend [--at <PATH>] <SOURCE>
//!   nmsp skeleton <PATH>
//!
//! The document is read from stdin for `get` and `extend`.

use clap::Parser;
use nmsp::cli::{get_log_level_from_verbose, read_input, run, Args};
use std::io::{self, Write};

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .parse_default_env()
        .init();

    let result = read_input(&args.command, io::stdin().lock())
        .and_then(|input| run(&args.command, &input));

    match result {
        Ok(output) => {
            if let Err(e) = writeln!(io::stdout(), "{output}") {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
