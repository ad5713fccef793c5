//! Tool context bundling the port trait objects.

use std::path::Path;
use std::time::Duration;

use crate::adapters::{LiveFileSystem, ProcessSnapshotCompiler};
use crate::ports::{FileSystem, SnapshotCompiler};

/// Bundles the port trait objects a generation run operates against.
///
/// Each field covers one external boundary. The CLI wires up the live
/// adapters; tests substitute in-memory implementations.
pub struct ToolContext {
    /// Filesystem for module configs, sources, and generated output.
    pub fs: Box<dyn FileSystem>,
    /// Snapshot compiler invoked once per scripted module.
    pub compiler: Box<dyn SnapshotCompiler>,
}

impl ToolContext {
    /// Creates a live context backed by the real filesystem and the external
    /// snapshot compiler at `tool`, with an optional per-invocation timeout.
    #[must_use]
    pub fn live(tool: &Path, timeout: Option<Duration>) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            compiler: Box::new(ProcessSnapshotCompiler::new(tool, timeout)),
        }
    }
}
