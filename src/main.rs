// main.rs

use clap::Parser;
use winsplit::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
