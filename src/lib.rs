// src/lib.rs

pub mod classify;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sink;
pub mod tool_paths;

use std::path::{Path, PathBuf};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::compiler::{CompilerOptions, CompilerTask};
use crate::config::{ConfigFile, default_config_path, load_and_validate, load_or_default};
use crate::errors::Result;
use crate::exec::InvocationSummary;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - tool resolution against the project root
/// - the process invoker and its tracing sink
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<InvocationSummary> {
    let (config_path, cfg) = match &args.config {
        Some(path) => (path.clone(), load_and_validate(path)?),
        None => {
            let path = default_config_path();
            let cfg = load_or_default(&path)?;
            (path, cfg)
        }
    };

    let root = project_root(&config_path, &cfg, args.root.as_deref());

    let task = CompilerTask::builder(&root)
        .options(CompilerOptions::from(&cfg.tool))
        .extra_args(args.args.iter().cloned())
        .build();

    if args.dry_run {
        print_dry_run(&task);
        return Ok(InvocationSummary::default());
    }

    // Ctrl-C → kill the compiler; its exit is reported as a failure.
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C; cancellation disabled");
            return;
        }
        let _ = cancel_tx.send(());
    });

    let summary = task.invoke_with_cancel(cancel_rx).await?;

    info!(
        error_lines = summary.error_lines,
        info_lines = summary.info_lines,
        "compiler finished successfully"
    );

    Ok(summary)
}

/// Figure out the directory the compiler runs in.
///
/// - `--root` wins outright.
/// - `[project].root` is taken relative to the config file's directory.
/// - Otherwise the config file's directory itself; for a bare filename like
///   "Tscrelay.toml" (parent = "") that is the current working directory.
fn project_root(config_path: &Path, cfg: &ConfigFile, cli_root: Option<&Path>) -> PathBuf {
    if let Some(root) = cli_root {
        return root.to_path_buf();
    }

    let config_dir = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    match &cfg.project.root {
        Some(root) => config_dir.join(root),
        None => config_dir,
    }
}

/// Simple dry-run output: the resolved command line and where it would run.
fn print_dry_run(task: &CompilerTask) {
    let request = task.request();

    println!("tscrelay dry-run");
    println!("  cwd: {}", request.working_dir().display());
    println!("  executable: {}", request.executable().display());
    if request.arguments().is_empty() {
        println!("  args: (none)");
    } else {
        println!("  args: {:?}", request.arguments());
    }
    println!("  command: {request}");

    debug!("dry-run complete (no execution)");
}
