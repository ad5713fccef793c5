//! Rendering: turns packaged modules into the two generated C sources.
//!
//! Rendering is pure text substitution over an immutable view. Byte values
//! are never recomputed here; the renderer only formats what segmentation
//! produced and applies the separator rules at segment and table boundaries.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::context::ToolContext;
use crate::error::{Error, Result};
use crate::pipeline::segment::{ByteSegment, PackagedModule};

/// Name of the generated declarations file.
pub const DECLS_FILE: &str = "js_modules.h";
/// Name of the generated data file.
pub const DATA_FILE: &str = "js_modules.c";

const BANNER: &str = "/* Generated by js2c. Do not edit. */\n\n";

/// Renderer input: the packaged modules in discovery order.
#[derive(Debug, Clone)]
pub struct GenerationView {
    modules: Vec<PackagedModule>,
}

impl GenerationView {
    /// Validates the packaged modules and wraps them for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateRender`] when a scripted module arrives
    /// without snapshot data, which means the stages ran out of order.
    pub fn new(modules: Vec<PackagedModule>) -> Result<Self> {
        for module in &modules {
            if module.descriptor.has_script && module.snapshot.is_none() {
                return Err(Error::TemplateRender(format!(
                    "module '{}' has a script but no snapshot data; segmentation did not run",
                    module.descriptor.name
                )));
            }
        }
        Ok(Self { modules })
    }

    /// All modules, in discovery order.
    #[must_use]
    pub fn modules(&self) -> &[PackagedModule] {
        &self.modules
    }

    /// The modules registered in the builtin require table, in discovery
    /// order.
    #[must_use]
    pub fn builtin_modules(&self) -> Vec<&PackagedModule> {
        self.modules.iter().filter(|m| m.descriptor.is_builtin).collect()
    }
}

/// Paths of the two generated files.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    /// The declarations file (`js_modules.h`).
    pub declarations: PathBuf,
    /// The data file (`js_modules.c`).
    pub data: PathBuf,
}

/// Renders the declarations file: one feature define per module, code and
/// size externs per scripted module, an init prototype per native module,
/// and the builtin-table declarations.
#[must_use]
pub fn render_declarations(view: &GenerationView) -> String {
    let mut out = String::from(BANNER);
    out.push_str("#ifndef __JS_MODULES_H\n#define __JS_MODULES_H\n\n");
    out.push_str("#include <stdint.h>\n#include \"jerryscript.h\"\n");

    if !view.modules().is_empty() {
        out.push('\n');
        for module in view.modules() {
            let _ = writeln!(out, "#define MODULE_{}", module.descriptor.upper_name());
        }
    }

    let scripted: Vec<&PackagedModule> =
        view.modules().iter().filter(|m| m.descriptor.has_script).collect();
    if !scripted.is_empty() {
        out.push('\n');
        for module in scripted {
            let name = &module.descriptor.name;
            let _ = writeln!(out, "extern const uint8_t module_{name}_code[];");
            let _ = writeln!(out, "extern const uint32_t module_{name}_size;");
        }
    }

    let native: Vec<&PackagedModule> =
        view.modules().iter().filter(|m| m.descriptor.has_native).collect();
    if !native.is_empty() {
        out.push('\n');
        for module in native {
            let _ = writeln!(out, "jerry_value_t module_{}_init(void);", module.descriptor.name);
        }
    }

    out.push_str("\ntypedef struct {\n");
    out.push_str("  const char *name;\n");
    out.push_str("  const uint8_t *code;\n");
    out.push_str("  uint32_t size;\n");
    out.push_str("  jerry_value_t (*init)(void);\n");
    out.push_str("} builtin_module_t;\n\n");
    out.push_str("extern const builtin_module_t builtin_modules[];\n");
    out.push_str("extern const uint32_t builtin_modules_count;\n\n");
    out.push_str("#endif /* __JS_MODULES_H */\n");
    out
}

/// Renders the data file: one byte-array literal and size constant per
/// module with snapshot data, then the builtin registration table.
///
/// Separator rules: every segment line ends with a comma except the one
/// holding the flagged last byte; every table entry ends with a comma
/// except the one whose module is the overall-last of the run. When the
/// overall-last module is not builtin, the final table entry keeps its
/// comma.
#[must_use]
pub fn render_data(view: &GenerationView) -> String {
    let mut out = String::from(BANNER);
    out.push_str("#include <stddef.h>\n#include \"js_modules.h\"\n");

    for module in view.modules() {
        let Some(data) = module.snapshot.as_ref() else { continue };
        let name = &module.descriptor.name;
        out.push('\n');
        let _ = writeln!(out, "const uint8_t module_{name}_code[] = {{");
        for segment in &data.segments {
            render_segment(&mut out, segment);
        }
        out.push_str("};\n");
        let _ = writeln!(out, "const uint32_t module_{name}_size = {};", data.size);
    }

    out.push_str("\nconst builtin_module_t builtin_modules[] = {\n");
    for module in view.builtin_modules() {
        render_table_entry(&mut out, module);
    }
    out.push_str("};\n\n");
    out.push_str(
        "const uint32_t builtin_modules_count = sizeof(builtin_modules) / sizeof(builtin_module_t);\n",
    );
    out
}

fn render_segment(out: &mut String, segment: &ByteSegment) {
    out.push_str("  ");
    for (i, byte) in segment.bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "0x{:02x}", byte.value);
    }
    if !segment.bytes.last().is_some_and(|b| b.is_last) {
        out.push(',');
    }
    out.push('\n');
}

fn render_table_entry(out: &mut String, module: &PackagedModule) {
    let descriptor = &module.descriptor;
    let name = &descriptor.name;
    let code = if descriptor.has_script {
        format!("module_{name}_code")
    } else {
        "NULL".to_string()
    };
    let size = module.snapshot.as_ref().map_or(0, |d| d.size);
    let init = if descriptor.has_native {
        format!("module_{name}_init")
    } else {
        "NULL".to_string()
    };
    let _ = write!(out, "  {{\"{name}\", {code}, {size}, {init}}}");
    if !module.is_last {
        out.push(',');
    }
    out.push('\n');
}

/// Renders both files and writes them under `<root>/src/gen/`, creating
/// the directory when absent. Both strings are fully rendered before
/// either file is written.
///
/// # Errors
///
/// Returns [`Error::Io`] when either file cannot be written.
pub fn write_sources(
    ctx: &ToolContext,
    view: &GenerationView,
    root: &Path,
) -> Result<GeneratedFiles> {
    let header = render_declarations(view);
    let data = render_data(view);

    let gen_dir = root.join("src/gen");
    let declarations = gen_dir.join(DECLS_FILE);
    ctx.fs.write(&declarations, &header).map_err(|e| Error::Io {
        action: "write generated header",
        path: declarations.clone(),
        source: e,
    })?;

    let data_path = gen_dir.join(DATA_FILE);
    ctx.fs.write(&data_path, &data).map_err(|e| Error::Io {
        action: "write generated data",
        path: data_path.clone(),
        source: e,
    })?;

    Ok(GeneratedFiles { declarations, data: data_path })
}
