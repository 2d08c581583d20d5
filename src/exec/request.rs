// src/exec/request.rs

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything needed to launch one tool process.
///
/// Built once, then only read. The fields are private so an in-flight
/// request can't have its argument list changed underneath the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    executable: PathBuf,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl InvocationRequest {
    /// A request with no arguments, run in `working_dir`.
    pub fn new(executable: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Short name of the executable for log fields (`tsc`, `node`, ...).
    pub fn tool_name(&self) -> String {
        self.executable
            .file_name()
            .unwrap_or_else(|| OsStr::new("tool"))
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for InvocationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
