//! Live adapter implementations of the port traits.

pub mod compiler;
pub mod filesystem;

pub use compiler::ProcessSnapshotCompiler;
pub use filesystem::LiveFileSystem;
