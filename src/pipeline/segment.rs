//! Byte segmentation: turns snapshot blobs into renderable byte segments.

use crate::context::ToolContext;
use crate::error::{Error, Result};
use crate::pipeline::descriptor::ModuleDescriptor;
use crate::pipeline::snapshot::SnapshotArtifact;

/// Bytes per generated source line.
pub const SEGMENT_BYTES: usize = 10;

/// One snapshot byte plus its boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentByte {
    /// The raw byte value.
    pub value: u8,
    /// True only for the final byte of a module's final segment.
    pub is_last: bool,
}

/// A run of at most [`SEGMENT_BYTES`] consecutive snapshot bytes,
/// rendered as one line of the generated data file.
#[derive(Debug, Clone)]
pub struct ByteSegment {
    /// The bytes in snapshot order.
    pub bytes: Vec<SegmentByte>,
}

/// A module's snapshot blob in segmented form.
#[derive(Debug, Clone)]
pub struct SnapshotData {
    /// Total snapshot size in bytes.
    pub size: usize,
    /// The segments; concatenating them reproduces the blob exactly.
    pub segments: Vec<ByteSegment>,
}

/// A module ready for rendering.
#[derive(Debug, Clone)]
pub struct PackagedModule {
    /// The module's descriptor, unchanged since discovery.
    pub descriptor: ModuleDescriptor,
    /// Segmented snapshot bytes; `Some` exactly for scripted modules.
    pub snapshot: Option<SnapshotData>,
    /// True only for the final module of the run, set by
    /// [`flag_last_module`].
    pub is_last: bool,
}

/// Partitions a snapshot blob into consecutive segments of at most
/// [`SEGMENT_BYTES`] bytes, preserving order with no padding. The final
/// byte of the final segment carries `is_last`; no other byte does. An
/// empty blob yields no segments.
#[must_use]
pub fn segment_bytes(raw: &[u8]) -> Vec<ByteSegment> {
    let mut segments: Vec<ByteSegment> = raw
        .chunks(SEGMENT_BYTES)
        .map(|chunk| ByteSegment {
            bytes: chunk.iter().map(|&value| SegmentByte { value, is_last: false }).collect(),
        })
        .collect();
    if let Some(byte) = segments.last_mut().and_then(|s| s.bytes.last_mut()) {
        byte.is_last = true;
    }
    segments
}

/// Marks the final module of the run. Exactly one module carries the flag
/// afterwards; an empty list is returned unchanged.
#[must_use]
pub fn flag_last_module(mut modules: Vec<PackagedModule>) -> Vec<PackagedModule> {
    if let Some(last) = modules.last_mut() {
        last.is_last = true;
    }
    modules
}

/// Pairs each descriptor with its segmented snapshot bytes, preserving
/// descriptor order. Modules without a compiled artifact (native-only ones)
/// carry no snapshot data. The last-module flag is left unset; callers run
/// [`flag_last_module`] over the result.
///
/// # Errors
///
/// Returns [`Error::Io`] when a snapshot artifact cannot be read back.
pub fn package_modules(
    ctx: &ToolContext,
    descriptors: Vec<ModuleDescriptor>,
    artifacts: &[SnapshotArtifact],
) -> Result<Vec<PackagedModule>> {
    let mut packaged = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let snapshot = match artifacts.iter().find(|a| a.module == descriptor.name) {
            Some(artifact) => {
                let raw = ctx.fs.read(&artifact.path).map_err(|e| Error::Io {
                    action: "read snapshot",
                    path: artifact.path.clone(),
                    source: e,
                })?;
                Some(SnapshotData { size: raw.len(), segments: segment_bytes(&raw) })
            }
            None => None,
        };
        packaged.push(PackagedModule { descriptor, snapshot, is_last: false });
    }
    Ok(packaged)
}
