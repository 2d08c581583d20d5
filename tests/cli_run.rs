// tests/cli_run.rs

mod common;
use crate::common::{TestResult, init_tracing, with_timeout};

use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use tscrelay::cli::{CliArgs, LogLevel};
use tscrelay::errors::RelayError;
use tscrelay::exec::InvocationSummary;
use tscrelay::logging::{COMPILER_TARGET, build_filter, parse_level_str};
use tscrelay::run;

fn args_for(config: PathBuf) -> CliArgs {
    CliArgs {
        config: Some(config),
        root: None,
        log_level: None,
        dry_run: false,
        args: Vec::new(),
    }
}

#[test]
fn trailing_args_are_collected_after_double_dash() -> TestResult {
    let args = CliArgs::try_parse_from([
        "tscrelay",
        "--config",
        "ci/Tscrelay.toml",
        "--dry-run",
        "--",
        "--noEmit",
        "-p",
        "tsconfig.json",
    ])?;

    assert_eq!(args.config, Some(PathBuf::from("ci/Tscrelay.toml")));
    assert!(args.dry_run);
    assert_eq!(args.args, vec!["--noEmit", "-p", "tsconfig.json"]);

    Ok(())
}

#[test]
fn log_level_names_are_parsed_leniently() {
    assert_eq!(parse_level_str(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("loud"), None);
}

#[test]
fn log_level_flag_overrides_the_environment() {
    let filter = build_filter(Some(LogLevel::Debug), Some("error"));
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn log_env_can_filter_compiler_output_separately() {
    let directive = format!("warn,{COMPILER_TARGET}=info");
    let filter = build_filter(None, Some(&directive)).to_string();

    assert!(filter.contains("tscrelay::compiler=info"), "got {filter}");
    assert!(filter.contains("warn"), "got {filter}");
}

#[test]
fn unusable_log_env_falls_back_to_info() {
    assert_eq!(build_filter(None, None).to_string(), "info");
    assert_eq!(build_filter(None, Some("  ")).to_string(), "info");
    // A bare word is not taken as a target name.
    assert_eq!(build_filter(None, Some("loud")).to_string(), "info");
    assert_eq!(build_filter(None, Some(" Trace ")).to_string(), "trace");
}

#[test]
fn exit_code_follows_the_compiler() {
    assert_eq!(RelayError::ProcessExit { code: Some(2) }.exit_code(), 2);
    assert_eq!(RelayError::ProcessExit { code: None }.exit_code(), 1);
    assert_eq!(RelayError::ConfigError("x".into()).exit_code(), 1);
}

#[tokio::test]
async fn dry_run_does_not_spawn_anything() -> TestResult {
    with_timeout(async {
        init_tracing();

        let dir = TempDir::new()?;
        let config = dir.path().join("Tscrelay.toml");
        std::fs::write(&config, "[tool]\nexecutable = \"does-not-exist\"\n")?;

        let mut args = args_for(config);
        args.dry_run = true;

        let summary = run(args).await?;
        assert_eq!(summary, InvocationSummary::default());

        Ok(())
    })
    .await
}

#[cfg(unix)]
#[tokio::test]
async fn run_uses_project_root_relative_to_config() -> TestResult {
    with_timeout(async {
        init_tracing();

        let dir = TempDir::new()?;
        let app = dir.path().join("app");
        std::fs::create_dir_all(app.join("scripts"))?;
        std::fs::write(
            app.join("scripts/check.sh"),
            "[ -f marker ] || exit 9\nprintf '%s\\n' \"checked $*\" > seen\n[ \"$*\" = \"--noEmit --strict\" ] || exit 7\necho \"checked $*\"\n",
        )?;
        std::fs::write(app.join("marker"), "")?;

        let config = dir.path().join("Tscrelay.toml");
        std::fs::write(
            &config,
            "[project]\nroot = \"app\"\n\n[tool]\nlauncher = \"/bin/sh\"\nexecutable = \"scripts/check.sh\"\ncustom_args = [\"--noEmit\"]\n",
        )?;

        let mut args = args_for(config);
        args.args = vec!["--strict".to_string()];

        let summary = run(args).await?;
        assert_eq!(summary.info_lines, 1);
        assert_eq!(summary.error_lines, 0);
        // Config arguments come first, then the trailing ones.
        assert_eq!(
            std::fs::read_to_string(app.join("seen"))?,
            "checked --noEmit --strict\n"
        );

        Ok(())
    })
    .await
}

#[cfg(unix)]
#[tokio::test]
async fn run_surfaces_compiler_failure() -> TestResult {
    with_timeout(async {
        init_tracing();

        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("tsc.sh"), "echo 'x.ts(1,1): error TS1: y'\nexit 4\n")?;
        let config = dir.path().join("Tscrelay.toml");
        std::fs::write(
            &config,
            "[tool]\nlauncher = \"/bin/sh\"\nexecutable = \"tsc.sh\"\n",
        )?;

        let result = run(args_for(config)).await;
        match result {
            Err(err @ RelayError::ProcessExit { .. }) => assert_eq!(err.exit_code(), 4),
            other => panic!("expected ProcessExit, got {other:?}"),
        }

        Ok(())
    })
    .await
}

#[tokio::test]
async fn missing_explicit_config_fails_before_running() -> TestResult {
    with_timeout(async {
        init_tracing();

        let dir = TempDir::new()?;
        let result = run(args_for(dir.path().join("nope.toml"))).await;
        assert!(matches!(result, Err(RelayError::IoError(_))));

        Ok(())
    })
    .await
}
