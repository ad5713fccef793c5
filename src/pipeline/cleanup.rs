//! Cleanup: removes the staged wrapper and snapshot files.

use crate::context::ToolContext;
use crate::pipeline::snapshot::SnapshotArtifact;
use crate::pipeline::wrapper::WrappedSource;

/// Deletes every staged `.wrapped` and `.snapshot` file after the generated
/// sources are on disk. Each failed deletion prints a warning to stderr;
/// the remaining files are still attempted and the run stays successful.
pub fn remove_artifacts(
    ctx: &ToolContext,
    wrapped: &[WrappedSource],
    snapshots: &[SnapshotArtifact],
) {
    let paths = wrapped.iter().map(|w| &w.path).chain(snapshots.iter().map(|a| &a.path));
    for path in paths {
        if let Err(e) = ctx.fs.remove_file(path) {
            eprintln!("Warning: failed to remove {}: {e}", path.display());
        }
    }
}
