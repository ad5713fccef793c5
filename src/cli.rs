//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the external snapshot compiler, relative to the
/// project root.
pub const DEFAULT_SNAPSHOT_TOOL: &str = "lib/jerryscript/build/bin/jerry-snapshot";

/// CLI parser for `js2c`.
#[derive(Debug, Parser)]
#[command(name = "js2c", version, about = "Pack JavaScript modules into embeddable C sources")]
pub struct Cli {
    /// Whitespace-separated module names to package, in order.
    #[arg(long)]
    pub modules: String,

    /// Target platform identifier (enables the board module with --board).
    #[arg(long)]
    pub target: Option<String>,

    /// Board identifier (enables the board module with --target).
    #[arg(long)]
    pub board: Option<String>,

    /// Project root holding src/modules/ and targets/.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path of the snapshot compiler; relative paths resolve against --root.
    #[arg(long, default_value = DEFAULT_SNAPSHOT_TOOL)]
    pub snapshot_tool: PathBuf,

    /// Kill a snapshot compilation that runs longer than this many seconds.
    #[arg(long, value_name = "SECS")]
    pub snapshot_timeout: Option<u64>,
}
