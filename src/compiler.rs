// src/compiler.rs

//! The compiler task: a configured tool bound to a project root.
//!
//! A [`CompilerTask`] is built once from a root path plus [`CompilerOptions`]
//! and then invoked any number of times. The tool location is resolved at
//! build time; each `invoke` produces a fresh [`InvocationRequest`] and hands
//! it to the task's [`ToolInvoker`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::config::ToolSection;
use crate::errors::Result;
use crate::exec::{InvocationRequest, InvocationSummary, ProcessInvoker, ToolInvoker};
use crate::sink::{LogSink, TracingSink};
use crate::tool_paths::{ResolvedTool, ToolLocation, resolve_tool};

/// Options for a compiler task. Every field is optional.
///
/// - `custom_args`: appended verbatim; `None` means no extra arguments.
/// - `location`: where the binary lives; `None` means the TypeScript package
///   under `node_modules`.
/// - `launcher`: program used to run the binary (e.g. `node`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    pub custom_args: Option<Vec<String>>,
    pub location: Option<ToolLocation>,
    pub launcher: Option<String>,
}

impl From<&ToolSection> for CompilerOptions {
    fn from(tool: &ToolSection) -> Self {
        Self {
            custom_args: Some(tool.custom_args.clone()),
            location: Some(tool.location()),
            launcher: tool.launcher.clone(),
        }
    }
}

/// A compiler bound to a project root, ready to be invoked.
pub struct CompilerTask {
    root: PathBuf,
    tool: ResolvedTool,
    custom_args: Vec<String>,
    invoker: Arc<dyn ToolInvoker>,
}

impl std::fmt::Debug for CompilerTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilerTask")
            .field("root", &self.root)
            .field("tool", &self.tool)
            .field("custom_args", &self.custom_args)
            .finish_non_exhaustive()
    }
}

impl CompilerTask {
    /// Start building a task rooted at `root`. The root doubles as the
    /// working directory of every invocation.
    pub fn builder(root: impl Into<PathBuf>) -> CompilerTaskBuilder {
        CompilerTaskBuilder::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tool(&self) -> &ResolvedTool {
        &self.tool
    }

    pub fn custom_args(&self) -> &[String] {
        &self.custom_args
    }

    /// The request the next `invoke` will run.
    pub fn request(&self) -> InvocationRequest {
        InvocationRequest::new(&self.tool.executable, &self.root)
            .args(self.tool.leading_args.iter().cloned())
            .args(self.custom_args.iter().cloned())
    }

    /// Run the compiler once.
    pub async fn invoke(&self) -> Result<InvocationSummary> {
        let request = self.request();
        self.invoker.invoke(&request).await
    }

    /// Run the compiler once; firing `cancel` kills it.
    pub async fn invoke_with_cancel(
        &self,
        cancel: oneshot::Receiver<()>,
    ) -> Result<InvocationSummary> {
        let request = self.request();
        self.invoker.invoke_with_cancel(&request, Some(cancel)).await
    }
}

/// Builder for [`CompilerTask`].
pub struct CompilerTaskBuilder {
    root: PathBuf,
    options: CompilerOptions,
    sink: Option<Arc<dyn LogSink>>,
    invoker: Option<Arc<dyn ToolInvoker>>,
}

impl CompilerTaskBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: CompilerOptions::default(),
            sink: None,
            invoker: None,
        }
    }

    /// Replace all options at once.
    pub fn options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn custom_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.custom_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Append arguments after any already configured.
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .custom_args
            .get_or_insert_with(Vec::new)
            .extend(args.into_iter().map(Into::into));
        self
    }

    pub fn location(mut self, location: ToolLocation) -> Self {
        self.options.location = Some(location);
        self
    }

    pub fn executable(self, path: impl Into<PathBuf>) -> Self {
        self.location(ToolLocation::Executable(path.into()))
    }

    pub fn launcher(mut self, launcher: impl Into<String>) -> Self {
        self.options.launcher = Some(launcher.into());
        self
    }

    /// Where relayed lines go. Ignored if a custom invoker is supplied.
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn invoker(mut self, invoker: Arc<dyn ToolInvoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Resolve the tool location and produce the task.
    pub fn build(self) -> CompilerTask {
        let location = self.options.location.unwrap_or_default();
        let tool = resolve_tool(&self.root, &location, self.options.launcher.as_deref());

        let invoker = match self.invoker {
            Some(invoker) => invoker,
            None => {
                let sink = self
                    .sink
                    .unwrap_or_else(|| Arc::new(TracingSink::new(tool_label(&location))));
                Arc::new(ProcessInvoker::new(sink))
            }
        };

        CompilerTask {
            root: self.root,
            tool,
            custom_args: self.options.custom_args.unwrap_or_default(),
            invoker,
        }
    }
}

/// Name used in log fields: the binary's file name.
fn tool_label(location: &ToolLocation) -> String {
    let path = match location {
        ToolLocation::Package { bin, .. } => bin,
        ToolLocation::Executable(path) => path,
    };
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tool".to_string())
}
