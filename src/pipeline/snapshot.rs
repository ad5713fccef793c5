//! Snapshot compilation: runs the external compiler over each wrapped source.

use std::path::PathBuf;

use crate::context::ToolContext;
use crate::error::{Error, Result};
use crate::pipeline::wrapper::WrappedSource;
use crate::ports::CompileError;

/// A compiled snapshot staged on disk, awaiting segmentation.
#[derive(Debug, Clone)]
pub struct SnapshotArtifact {
    /// Name of the module the snapshot belongs to.
    pub module: String,
    /// Location of the snapshot file.
    pub path: PathBuf,
}

/// Compiles every wrapped source into a snapshot, one blocking invocation
/// per module, in order. The snapshot lands next to the wrapped file with
/// the `.snapshot` extension. Compiler stdout/stderr pass straight through
/// to the caller's terminal.
///
/// # Errors
///
/// Returns [`Error::SnapshotCompileFailed`] on a non-zero compiler exit,
/// [`Error::SnapshotTimeout`] when a configured time limit is exceeded, and
/// [`Error::Io`] when the compiler process cannot be spawned at all.
pub fn compile_snapshots(
    ctx: &ToolContext,
    wrapped: &[WrappedSource],
) -> Result<Vec<SnapshotArtifact>> {
    let mut artifacts = Vec::with_capacity(wrapped.len());
    for source in wrapped {
        let output = source.path.with_extension("snapshot");
        ctx.compiler.compile(&source.path, &output).map_err(|e| match e {
            CompileError::Failed { status } => {
                Error::SnapshotCompileFailed { module: source.module.clone(), status }
            }
            CompileError::TimedOut { timeout_secs } => {
                Error::SnapshotTimeout { module: source.module.clone(), timeout_secs }
            }
            CompileError::Spawn(io) => Error::Io {
                action: "spawn snapshot compiler for",
                path: source.path.clone(),
                source: Box::new(io),
            },
        })?;
        artifacts.push(SnapshotArtifact { module: source.module.clone(), path: output });
    }
    Ok(artifacts)
}
