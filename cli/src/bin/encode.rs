use std::process::ExitCode;

use clap::Parser;
use lz78_cli::args::EncodeCli;
use lz78_cli::{finish, logging, run};

fn main() -> ExitCode {
    let cli = EncodeCli::parse();
    logging::init_tracing();

    let result = run::run_encode(&cli.args);
    finish("encode", &cli.args, result)
}
