//! Source wrapping: frames each module script as a loadable module factory.

use std::path::PathBuf;

use crate::context::ToolContext;
use crate::error::{Error, Result};
use crate::pipeline::descriptor::ModuleDescriptor;

/// Text prepended to every module script.
pub const WRAPPER_HEADER: &str = "(function(exports, require, module) {\n";
/// Text appended to every module script.
pub const WRAPPER_FOOTER: &str = "\n});\n";

/// A wrapped script staged on disk, awaiting snapshot compilation.
#[derive(Debug, Clone)]
pub struct WrappedSource {
    /// Name of the module the source belongs to.
    pub module: String,
    /// Location of the wrapped file.
    pub path: PathBuf,
}

/// Wraps every scripted module's source in the module-factory frame.
///
/// Reads `<dir>/<name>.js` and writes `<dir>/<name>.wrapped` holding the
/// source byte-for-byte between [`WRAPPER_HEADER`] and [`WRAPPER_FOOTER`].
/// The source is not parsed or validated. Descriptors without a script are
/// skipped; the returned list keeps descriptor order.
///
/// # Errors
///
/// Returns [`Error::Io`] when a script cannot be read or a wrapped file
/// cannot be written.
pub fn wrap_sources(
    ctx: &ToolContext,
    descriptors: &[ModuleDescriptor],
) -> Result<Vec<WrappedSource>> {
    let mut wrapped = Vec::new();
    for descriptor in descriptors.iter().filter(|d| d.has_script) {
        let script = descriptor.script_path();
        let source = ctx.fs.read_to_string(&script).map_err(|e| Error::Io {
            action: "read script",
            path: script.clone(),
            source: e,
        })?;

        let path = descriptor.wrapped_path();
        let framed = format!("{WRAPPER_HEADER}{source}{WRAPPER_FOOTER}");
        ctx.fs.write(&path, &framed).map_err(|e| Error::Io {
            action: "write wrapped source",
            path: path.clone(),
            source: e,
        })?;

        wrapped.push(WrappedSource { module: descriptor.name.clone(), path });
    }
    Ok(wrapped)
}
