//! Common test helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn gator_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gator"))
}

/// Run the gator binary with `home` as the home directory.
pub fn run_gator(home: &Path, args: &[&str]) -> Output {
    Command::new(gator_binary())
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run gator binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Read the config file under `home` as raw JSON.
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("Failed to read config file");
    serde_json::from_str(&content).expect("Config file is not valid JSON")
}
