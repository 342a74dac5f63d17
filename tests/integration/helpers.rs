//! Shared helpers for integration tests

use std::path::Path;
use std::sync::Arc;

use assert_cmd::Command;
use tempfile::TempDir;

use termtype::animator::{Animator, AnimatorConfig, SourceText};
use termtype::render::Recorder;

/// `termtype` command isolated from the user's config and colors.
pub fn termtype(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("termtype").expect("termtype binary is built");
    cmd.env("NO_COLOR", "1")
        .env("TERMTYPE_CONFIG_DIR", config_dir)
        .env_remove("TERMTYPE_LOG");
    cmd
}

/// Run termtype and capture (stdout, stderr, exit code).
pub fn run_termtype(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = termtype(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute termtype");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Animator with a fixed seed and a recording sink.
pub fn seeded_animator(seed: u64, config: AnimatorConfig) -> Animator<Recorder> {
    let config = AnimatorConfig {
        seed: Some(seed),
        ..config
    };
    Animator::new(config, Recorder::new()).expect("valid animator config")
}

pub fn source(text: &str) -> Arc<SourceText> {
    Arc::new(SourceText::new(text))
}
