//! Live snapshot compiler adapter using `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::time::{Duration, Instant};

use crate::ports::compiler::{CompileError, SnapshotCompiler};

/// Interval between exit checks while waiting on a bounded invocation.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Live snapshot compiler that shells out to the external tool.
///
/// Invokes `<tool> generate <source> -o <output>` with inherited stdio so
/// compiler diagnostics reach the console unmodified.
pub struct ProcessSnapshotCompiler {
    tool: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessSnapshotCompiler {
    /// Creates a compiler adapter for the tool at the given path.
    ///
    /// When `timeout` is `Some`, an invocation still running after that long
    /// is killed and reported as [`CompileError::TimedOut`]; `None` waits
    /// indefinitely.
    #[must_use]
    pub fn new(tool: &Path, timeout: Option<Duration>) -> Self {
        Self { tool: tool.to_path_buf(), timeout }
    }

    fn wait_bounded(child: &mut Child, timeout: Duration) -> Result<ExitStatus, CompileError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                child.kill()?;
                let _ = child.wait();
                return Err(CompileError::TimedOut { timeout_secs: timeout.as_secs() });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl SnapshotCompiler for ProcessSnapshotCompiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError> {
        let mut child = Command::new(&self.tool)
            .arg("generate")
            .arg(source)
            .arg("-o")
            .arg(output)
            .spawn()?;

        let status = match self.timeout {
            Some(timeout) => Self::wait_bounded(&mut child, timeout)?,
            None => child.wait()?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed { status: status.code().unwrap_or(-1) })
        }
    }
}
