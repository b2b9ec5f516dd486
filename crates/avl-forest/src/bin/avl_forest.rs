//! `avl-forest`: build a tree from integers on stdin and print it.
//!
//! Usage:
//!   avl-forest [--avl | --bst] [--order <name>] [--remove <value>]... [--render] [--dump]
//!
//! Set `RUST_LOG=avl_forest=trace` to log every rotation.

use avl_forest::cli::{run, CliOptions, USAGE};
use std::io::{self, Read};

fn main() {
    pretty_env_logger::init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&options, &buf) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
