//! Module discovery: resolves the requested module names into descriptors.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::context::ToolContext;
use crate::error::{Error, Result};
use crate::pipeline::GenerateOptions;

/// On-disk `module.json` shape. Absent flags read as `false`.
#[derive(Debug, Default, Deserialize)]
struct ModuleConfig {
    #[serde(default)]
    js: bool,
    #[serde(default)]
    native: bool,
    #[serde(default)]
    require: bool,
}

/// One module selected for packaging: its source directory plus the
/// packaging flags read from `module.json`.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    /// Module name, as it appears in the generated builtin table.
    pub name: String,
    /// Directory holding the module's config and sources.
    pub dir: PathBuf,
    /// Ships a JavaScript source that gets snapshotted.
    pub has_script: bool,
    /// Has a native C initializer.
    pub has_native: bool,
    /// Registered in the builtin require table.
    pub is_builtin: bool,
}

impl ModuleDescriptor {
    /// Uppercased module name, used in generated C macros.
    #[must_use]
    pub fn upper_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Path of the module's JavaScript source.
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.dir.join(format!("{}.js", self.name))
    }

    /// Path the wrapped source is staged at before snapshotting.
    #[must_use]
    pub fn wrapped_path(&self) -> PathBuf {
        self.dir.join(format!("{}.wrapped", self.name))
    }

    /// Path the compiled snapshot is staged at.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.snapshot", self.name))
    }
}

/// Resolves the caller's module-name list into descriptors, in request order.
///
/// Each name maps to `<root>/src/modules/<name>` and must carry a readable
/// `module.json`. When both a target and a board are given and the board
/// directory ships a `board.js`, a synthetic `board` descriptor is appended
/// after the named modules; without the file the probe is silent.
///
/// # Errors
///
/// Returns [`Error::DuplicateModule`] when a name appears twice in the list
/// and [`Error::ConfigNotFound`] when a module's config is missing or
/// malformed. Either aborts the run before anything is generated.
pub fn load_descriptors(
    ctx: &ToolContext,
    opts: &GenerateOptions,
) -> Result<Vec<ModuleDescriptor>> {
    let names: Vec<&str> = opts.modules.split_whitespace().collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(Error::DuplicateModule((*name).to_string()));
        }
    }

    let mut descriptors = Vec::with_capacity(names.len() + 1);
    for name in &names {
        println!("module: {name} ------------------------------");
        let dir = opts.root.join("src/modules").join(name);
        let config = load_config(ctx, name, &dir)?;
        descriptors.push(ModuleDescriptor {
            name: (*name).to_string(),
            dir,
            has_script: config.js,
            has_native: config.native,
            is_builtin: config.require,
        });
    }

    if let (Some(target), Some(board)) = (&opts.target, &opts.board) {
        let board_dir = opts.root.join("targets").join(target).join("boards").join(board);
        if ctx.fs.exists(&board_dir.join("board.js")) {
            descriptors.push(ModuleDescriptor {
                name: "board".to_string(),
                dir: board_dir,
                has_script: true,
                has_native: false,
                is_builtin: false,
            });
        }
    }

    Ok(descriptors)
}

fn load_config(ctx: &ToolContext, name: &str, dir: &Path) -> Result<ModuleConfig> {
    let path = dir.join("module.json");
    let raw = ctx.fs.read_to_string(&path).map_err(|e| Error::ConfigNotFound {
        module: name.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| Error::ConfigNotFound {
        module: name.to_string(),
        reason: e.to_string(),
    })
}
