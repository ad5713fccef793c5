//! Shared test fakes: an in-memory filesystem and a scripted compiler.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::context::ToolContext;
use crate::error::BoxedError;
use crate::pipeline::descriptor::ModuleDescriptor;
use crate::ports::{CompileError, FileSystem, SnapshotCompiler};

/// Shared path-to-bytes map backing [`MemFs`] and [`FakeCompiler`].
pub type FileMap = Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>;

/// In-memory filesystem for exercising the pipeline without touching disk.
pub struct MemFs {
    files: FileMap,
}

impl MemFs {
    pub fn new(files: &FileMap) -> Self {
        Self { files: Arc::clone(files) }
    }
}

impl FileSystem for MemFs {
    fn read_to_string(&self, path: &Path) -> Result<String, BoxedError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(Into::into)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, BoxedError> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), BoxedError> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        // Exact file match, or any file "under" this directory.
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), BoxedError> {
        let mut files = self.files.lock().unwrap();
        files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }
}

/// Scripted snapshot compiler. By default it copies the source file's bytes
/// to the output path, so snapshot contents equal wrapped contents; builder
/// methods swap in fixed output bytes or canned failures.
pub struct FakeCompiler {
    files: FileMap,
    outputs: HashMap<String, Vec<u8>>,
    fail_status: Option<i32>,
    timeout_secs: Option<u64>,
    spawn_error: bool,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeCompiler {
    pub fn new(files: &FileMap) -> Self {
        Self {
            files: Arc::clone(files),
            outputs: HashMap::new(),
            fail_status: None,
            timeout_secs: None,
            spawn_error: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fixes the bytes written for the named module's snapshot.
    pub fn with_output(mut self, module: &str, bytes: &[u8]) -> Self {
        self.outputs.insert(module.to_string(), bytes.to_vec());
        self
    }

    /// Makes every invocation exit with the given status.
    pub fn failing(mut self, status: i32) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Makes every invocation report an exceeded time limit.
    pub fn timing_out(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Makes every invocation fail to spawn.
    pub fn spawn_failing(mut self) -> Self {
        self.spawn_error = true;
        self
    }

    /// Handle on the recorded source paths, one per invocation.
    pub fn calls(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.calls)
    }
}

impl SnapshotCompiler for FakeCompiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError> {
        self.calls.lock().unwrap().push(source.to_path_buf());
        if self.spawn_error {
            return Err(CompileError::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such tool",
            )));
        }
        if let Some(status) = self.fail_status {
            return Err(CompileError::Failed { status });
        }
        if let Some(timeout_secs) = self.timeout_secs {
            return Err(CompileError::TimedOut { timeout_secs });
        }
        let module =
            source.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let mut files = self.files.lock().unwrap();
        let bytes = self
            .outputs
            .get(&module)
            .cloned()
            .or_else(|| files.get(source).cloned())
            .unwrap_or_default();
        files.insert(output.to_path_buf(), bytes);
        Ok(())
    }
}

pub fn new_files() -> FileMap {
    Arc::new(Mutex::new(HashMap::new()))
}

pub fn context_with(files: &FileMap, compiler: FakeCompiler) -> ToolContext {
    ToolContext { fs: Box::new(MemFs::new(files)), compiler: Box::new(compiler) }
}

/// Context over a fresh shared file map, with the default copying compiler.
pub fn mem_context() -> (ToolContext, FileMap) {
    let files = new_files();
    let ctx = context_with(&files, FakeCompiler::new(&files));
    (ctx, files)
}

pub fn put(files: &FileMap, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
    files.lock().unwrap().insert(path.into(), contents.into());
}

pub fn read_string(files: &FileMap, path: &Path) -> String {
    let files = files.lock().unwrap();
    let bytes = files.get(path).unwrap_or_else(|| panic!("missing file: {}", path.display()));
    String::from_utf8(bytes.clone()).unwrap()
}

pub fn exists(files: &FileMap, path: &Path) -> bool {
    files.lock().unwrap().contains_key(path)
}

/// Descriptor rooted at the conventional module directory.
pub fn descriptor(name: &str, js: bool, native: bool, require: bool) -> ModuleDescriptor {
    ModuleDescriptor {
        name: name.to_string(),
        dir: PathBuf::from("/proj/src/modules").join(name),
        has_script: js,
        has_native: native,
        is_builtin: require,
    }
}
