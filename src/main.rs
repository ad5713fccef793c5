//! Binary entrypoint for the `js2c` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match js2c::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
