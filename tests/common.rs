use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for graphwalk that ignores any user configuration
pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", "/nonexistent/graphwalk-test-config")
        .env_remove("GRAPHWALK_CONFIG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for graphwalk reading configuration from `dir`
#[allow(dead_code)]
pub fn graphwalk_with_config_dir(dir: &Path) -> Command {
    let mut cmd = graphwalk();
    cmd.env("GRAPHWALK_CONFIG_DIR", dir);
    cmd
}

/// Parse stdout of a successful command as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
