use std::process::ExitCode;

use clap::Parser;
use lz78_cli::args::DecodeCli;
use lz78_cli::{finish, logging, run};

fn main() -> ExitCode {
    let cli = DecodeCli::parse();
    logging::init_tracing();

    let result = run::run_decode(&cli.args);
    finish("decode", &cli.args, result)
}
