//! Core library entry for the `js2c` CLI.
//!
//! `js2c` packs a set of JavaScript modules into two generated C sources
//! holding precompiled bytecode snapshots, so firmware can embed scripting
//! modules without a filesystem or an on-device compiler.

pub mod adapters;
pub mod cli;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod ports;

#[cfg(test)]
mod testutil;

pub use error::Error;

use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

use crate::context::ToolContext;
use crate::pipeline::GenerateOptions;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or generation fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let tool = if cli.snapshot_tool.is_absolute() {
        cli.snapshot_tool.clone()
    } else {
        cli.root.join(&cli.snapshot_tool)
    };
    let ctx = ToolContext::live(&tool, cli.snapshot_timeout.map(Duration::from_secs));
    let opts = GenerateOptions {
        modules: cli.modules,
        target: cli.target,
        board: cli.board,
        root: cli.root,
    };

    pipeline::generate(&ctx, &opts).map(|_| ()).map_err(|err| err.to_string())
}
