//! The module packaging pipeline.
//!
//! A generation run walks six stages in a fixed order, each consuming the
//! previous stage's complete output:
//!
//! 1. [`descriptor::load_descriptors`] resolves module names to descriptors.
//! 2. [`wrapper::wrap_sources`] frames each script as a module factory.
//! 3. [`snapshot::compile_snapshots`] runs the external snapshot compiler.
//! 4. [`segment::package_modules`] reads the blobs back and segments them.
//! 5. [`render::write_sources`] renders and writes the two C sources.
//! 6. [`cleanup::remove_artifacts`] deletes the staged intermediates.
//!
//! Stage outputs are immutable once produced. Any error aborts the run
//! before later stages start; a failed run must be treated as having
//! produced no usable output, even when partial files exist on disk.

pub mod cleanup;
pub mod descriptor;
pub mod render;
pub mod segment;
pub mod snapshot;
pub mod wrapper;

use std::path::PathBuf;

use crate::context::ToolContext;
use crate::error::Result;
use crate::pipeline::render::{GeneratedFiles, GenerationView};

/// Caller-supplied parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Whitespace-separated module names, in packaging order.
    pub modules: String,
    /// Target platform identifier; with `board`, enables the board probe.
    pub target: Option<String>,
    /// Board identifier; with `target`, enables the board probe.
    pub board: Option<String>,
    /// Project root holding `src/modules/` and `targets/`, and receiving
    /// `src/gen/`.
    pub root: PathBuf,
}

/// Runs the whole pipeline for the given options and reports the paths of
/// the two generated files.
///
/// Prints per-module progress during discovery and the generated file
/// paths on success. Concurrent runs against the same root are not
/// supported; serializing them is the caller's responsibility.
///
/// # Errors
///
/// Propagates the first fatal error from any stage; see [`crate::Error`]
/// for the possible failures.
pub fn generate(ctx: &ToolContext, opts: &GenerateOptions) -> Result<GeneratedFiles> {
    println!("Generating modules for build...");
    println!();

    let descriptors = descriptor::load_descriptors(ctx, opts)?;
    let wrapped = wrapper::wrap_sources(ctx, &descriptors)?;
    let snapshots = snapshot::compile_snapshots(ctx, &wrapped)?;
    let packaged = segment::package_modules(ctx, descriptors, &snapshots)?;
    let packaged = segment::flag_last_module(packaged);
    let view = GenerationView::new(packaged)?;
    let generated = render::write_sources(ctx, &view, &opts.root)?;
    cleanup::remove_artifacts(ctx, &wrapped, &snapshots);

    println!("Generated {}", generated.declarations.display());
    println!("Generated {}", generated.data.display());
    Ok(generated)
}
