//! lz78-cli
//!
//! Thin front ends around `lz78-core`: argument parsing, file handles, permission bits,
//! and statistics printing.

pub mod args;
pub mod io;
pub mod logging;
pub mod report;
pub mod run;

use std::process::ExitCode;

use lz78_core::telemetry::TelemetrySnapshot;

/// Shared `main` body: print stats on success, a message and status on failure.
pub fn finish(name: &str, args: &args::CodecArgs, result: anyhow::Result<TelemetrySnapshot>) -> ExitCode {
    match result {
        Ok(snapshot) => {
            if args.wants_stats() {
                if let Err(e) = report::write_stats(&mut std::io::stderr(), &snapshot, args.json) {
                    eprintln!("{name}: {e:#}");
                    return ExitCode::from(run::EXIT_FAILURE);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = run::exit_code(&e);
            if code == run::EXIT_BAD_MAGIC {
                eprintln!("{name}: Bad magic number");
            } else {
                eprintln!("{name}: {e:#}");
            }
            ExitCode::from(code)
        }
    }
}
