//! Error taxonomy for a generation run.
//!
//! Every variant is fatal and aborts the run; callers must treat any failed
//! run as having produced no valid output, even when partial files exist on
//! disk. Cleanup failures have no variant here; they only warn.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error type returned by the port implementations.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A named module's `module.json` record is missing, unreadable, or
    /// unparsable. Raised before any file is generated.
    #[error("module '{module}': cannot load module.json ({reason})")]
    ConfigNotFound {
        /// Module name as given in the input list.
        module: String,
        /// The underlying read or parse failure.
        reason: String,
    },

    /// The same module name appeared more than once in the input list.
    /// Duplicates would emit duplicate C symbols, which cannot link.
    #[error("duplicate module name '{0}' in module list")]
    DuplicateModule(String),

    /// A read or write failed while wrapping, snapshotting, segmenting, or
    /// writing generated output.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// What the pipeline was doing, e.g. `"read script"`.
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying failure from the filesystem port.
        #[source]
        source: BoxedError,
    },

    /// The external snapshot compiler exited with a non-zero status. Its
    /// stdout/stderr have already been passed through for diagnostics.
    #[error("snapshot compiler failed for module '{module}' (exit status {status})")]
    SnapshotCompileFailed {
        /// Module whose wrapped source was being compiled.
        module: String,
        /// Exit status code; -1 when the process died without one.
        status: i32,
    },

    /// The external snapshot compiler exceeded the configured time limit
    /// and was killed.
    #[error("snapshot compiler timed out for module '{module}' after {timeout_secs}s")]
    SnapshotTimeout {
        /// Module whose wrapped source was being compiled.
        module: String,
        /// The limit that was exceeded, in seconds.
        timeout_secs: u64,
    },

    /// A module reached the renderer missing required derived data. This is
    /// a pipeline-ordering defect, not a recoverable condition.
    #[error("template render failed: {0}")]
    TemplateRender(String),
}
