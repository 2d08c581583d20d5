// tests/config_loading.rs

mod common;
use crate::common::{TestResult, init_tracing};

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use tscrelay::config::{ConfigFile, load_and_validate, load_or_default};
use tscrelay::errors::RelayError;
use tscrelay::tool_paths::{DEFAULT_PACKAGE_BIN, DEFAULT_PACKAGE_PATH, ToolLocation};
use tscrelay_test_utils::builders::ConfigFileBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_parsed() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[project]
root = "packages/app"

[tool]
package_path = "node_modules/typescript"
bin = "lib/tsc.js"
launcher = "node"
custom_args = ["--noEmit", "-p", "tsconfig.build.json"]
"#,
    );

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.project.root, Some(PathBuf::from("packages/app")));
    assert_eq!(cfg.tool.bin, "lib/tsc.js");
    assert_eq!(cfg.tool.launcher.as_deref(), Some("node"));
    assert_eq!(
        cfg.tool.custom_args,
        vec!["--noEmit", "-p", "tsconfig.build.json"]
    );
    assert_eq!(
        cfg.tool.location(),
        ToolLocation::Package {
            package_path: PathBuf::from("node_modules/typescript"),
            bin: PathBuf::from("lib/tsc.js"),
        }
    );

    Ok(())
}

#[test]
fn empty_file_yields_typescript_defaults() -> TestResult {
    init_tracing();

    let file = write_config("");
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.project.root, None);
    assert_eq!(cfg.tool.package_path, DEFAULT_PACKAGE_PATH);
    assert_eq!(cfg.tool.bin, DEFAULT_PACKAGE_BIN);
    assert!(cfg.tool.executable.is_none());
    assert!(cfg.tool.launcher.is_none());
    assert!(cfg.tool.custom_args.is_empty());

    Ok(())
}

#[test]
fn explicit_executable_overrides_package() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[tool]
executable = "/opt/typescript/bin/tsc"
bin = ""
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(
        cfg.tool.location(),
        ToolLocation::Executable(PathBuf::from("/opt/typescript/bin/tsc"))
    );

    Ok(())
}

#[test]
fn custom_args_are_not_interpreted() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[tool]
custom_args = ["", "  spaced  ", "--outDir=dist; rm -rf /"]
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(
        cfg.tool.custom_args,
        vec!["", "  spaced  ", "--outDir=dist; rm -rf /"]
    );

    Ok(())
}

#[test]
fn empty_bin_is_a_config_error() {
    init_tracing();

    let file = write_config(
        r#"
[tool]
bin = "  "
"#,
    );

    match load_and_validate(file.path()) {
        Err(RelayError::ConfigError(msg)) => assert!(msg.contains("[tool].bin")),
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn empty_launcher_is_a_config_error() {
    init_tracing();

    let file = write_config(
        r#"
[tool]
launcher = ""
"#,
    );

    match load_and_validate(file.path()) {
        Err(RelayError::ConfigError(msg)) => assert!(msg.contains("launcher")),
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_toml_error() {
    init_tracing();

    let file = write_config("[tool\ncustom_args = 3");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(RelayError::TomlError(_))
    ));
}

#[test]
fn missing_explicit_config_is_an_io_error() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let result = load_and_validate(dir.path().join("Tscrelay.toml"));

    assert!(matches!(result, Err(RelayError::IoError(_))));

    Ok(())
}

#[test]
fn missing_default_config_falls_back_to_defaults() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let cfg = load_or_default(dir.path().join("Tscrelay.toml"))?;

    assert_eq!(cfg.tool.package_path, DEFAULT_PACKAGE_PATH);
    assert!(cfg.tool.custom_args.is_empty());

    Ok(())
}

#[test]
fn builder_output_passes_validation() {
    init_tracing();

    let cfg: ConfigFile = ConfigFileBuilder::new()
        .launcher("node")
        .custom_arg("--pretty")
        .custom_arg("false")
        .build();

    assert_eq!(cfg.tool.custom_args, vec!["--pretty", "false"]);

    let invalid = ConfigFileBuilder::new().package("", "bin/tsc").raw();
    assert!(ConfigFile::try_from(invalid).is_err());
}
