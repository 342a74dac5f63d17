//! CLI surface tests: help, listings, completions and config

use predicates::prelude::*;

use crate::helpers::{run_termtype, temp_dir, termtype};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = temp_dir();
    let (stdout, _stderr, code) = run_termtype(dir.path(), &["--help"]);

    assert_eq!(code, 0);
    for command in ["play", "export", "copy", "samples", "themes", "config", "completions"] {
        assert!(stdout.contains(command), "help is missing {command}:\n{stdout}");
    }
}

#[test]
fn version_flag_prints_name() {
    let dir = temp_dir();
    termtype(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("termtype "));
}

#[test]
fn unknown_subcommand_fails() {
    let dir = temp_dir();
    let (_stdout, stderr, code) = run_termtype(dir.path(), &["dance"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("dance"));
}

// ============================================================================
// Listings
// ============================================================================

#[test]
fn samples_lists_every_language() {
    let dir = temp_dir();
    let (stdout, _stderr, code) = run_termtype(dir.path(), &["samples"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), termtype::samples::all().len());
    assert!(stdout.contains("javascript"));
    assert!(stdout.contains("rust"));
    assert!(!stdout.contains('\x1b'), "NO_COLOR output has escapes");
}

#[test]
fn themes_show_plain_swatches_without_color() {
    let dir = temp_dir();
    let (stdout, _stderr, code) = run_termtype(dir.path(), &["themes"]);

    assert_eq!(code, 0);
    let names: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, termtype::theme::THEME_NAMES);
    assert!(stdout.contains("bg #2e3440  text #a3be8c  accent #88c0d0"));
}

#[test]
fn completions_for_bash_mention_binary() {
    let dir = temp_dir();
    termtype(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termtype"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_override_dir() {
    let dir = temp_dir();
    let (stdout, _stderr, code) = run_termtype(dir.path(), &["config", "path"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_defaults_when_missing() {
    let dir = temp_dir();
    let (stdout, _stderr, code) = run_termtype(dir.path(), &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[animation]"));
    assert!(stdout.contains("speed = 40.0"));
    assert!(stdout.contains("theme = \"dark\""));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");

    let (stdout, _stderr, code) = run_termtype(dir.path(), &["config", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Wrote "));
    assert!(path.exists());

    let (_stdout, stderr, code) = run_termtype(dir.path(), &["config", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--force"));

    let (_stdout, _stderr, code) = run_termtype(dir.path(), &["config", "init", "--force"]);
    assert_eq!(code, 0);
}

#[test]
fn invalid_config_is_reported() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("config.toml"), "[animation]\nspeed = -5\n").unwrap();

    let (_stdout, stderr, code) = run_termtype(dir.path(), &["config", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("animation.speed"));
}

// ============================================================================
// Play and copy
// ============================================================================

#[test]
fn play_without_terminal_fails() {
    let dir = temp_dir();
    let (_stdout, stderr, code) = run_termtype(dir.path(), &["play", "--sample", "rust"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("interactive terminal"));
}

#[test]
fn copy_rejects_empty_input() {
    let dir = temp_dir();
    termtype(dir.path())
        .args(["copy", "-"])
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn file_and_sample_conflict() {
    let dir = temp_dir();
    let (_stdout, stderr, code) =
        run_termtype(dir.path(), &["export", "json", "main.rs", "--sample", "rust"]);

    assert_eq!(code, 2);
    assert!(stderr.contains("cannot be used with"));
}
