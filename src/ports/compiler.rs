//! Snapshot compiler port for driving the external bytecode compiler.

use std::path::Path;

use thiserror::Error;

/// Failure modes of a single snapshot compiler invocation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiler process could not be spawned or waited on.
    #[error("failed to run snapshot compiler: {0}")]
    Spawn(#[from] std::io::Error),

    /// The compiler exited with a non-zero status.
    #[error("snapshot compiler exited with status {status}")]
    Failed {
        /// Exit status code; -1 when the process died without one.
        status: i32,
    },

    /// The compiler exceeded the configured time limit and was killed.
    #[error("snapshot compiler timed out after {timeout_secs}s")]
    TimedOut {
        /// The limit that was exceeded, in seconds.
        timeout_secs: u64,
    },
}

/// Compiles wrapped script sources into binary snapshot artifacts.
///
/// The compiler is an opaque external collaborator: it either exits
/// successfully having written the output file, or fails with no reliable
/// output. The artifact's internal structure is never inspected here.
pub trait SnapshotCompiler: Send + Sync {
    /// Compiles `source` into a binary snapshot written to `output`,
    /// blocking until the compiler exits. The compiler's stdout and stderr
    /// pass through unmodified for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, exits non-zero,
    /// or exceeds the configured time limit.
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError>;
}
