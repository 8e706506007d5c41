//! Quire CLI

use std::io;

use quire::cli::{self, Options};

fn main() {
    quire::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    if options.help {
        println!("{}", cli::USAGE);
        return;
    }

    let result = cli::read_source(&options, io::stdin().lock())
        .and_then(|source| cli::run(&options, &source, io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
