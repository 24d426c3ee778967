//! java2go CLI entry point.

use clap::Parser;
use java2go::cli::{self, Cli, Commands, EXIT_ERROR};
use java2go::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Translate(args) => cli::run_translate(args),
        Commands::Fmt(args) => cli::run_fmt(args),
        Commands::Template(args) => cli::run_template(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
