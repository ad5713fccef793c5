//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the packaging pipeline and an
//! external system (the disk, the snapshot compiler). Implementations live
//! in `src/adapters/`.

pub mod compiler;
pub mod filesystem;

pub use compiler::{CompileError, SnapshotCompiler};
pub use filesystem::FileSystem;
