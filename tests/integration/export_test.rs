//! Export subcommand tests

use std::fs;
use std::time::Duration;

use predicates::prelude::*;

use termtype::asciicast::{AsciicastFile, EventType};

use crate::helpers::{run_termtype, temp_dir, termtype};

const CODE: &str = "fn a() {}\nfn b() {}";

/// Run `termtype export <args> -o -` with `CODE` on stdin.
fn export_stdout(args: &[&str]) -> String {
    let dir = temp_dir();
    let output = termtype(dir.path())
        .arg("export")
        .args(args)
        .args(["-", "--seed", "7", "-o", "-"])
        .write_stdin(CODE)
        .output()
        .expect("Failed to execute termtype");
    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 export")
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn snapshot_shows_final_screen() {
    let plain = export_stdout(&["snapshot", "--no-preamble"]);
    assert_eq!(plain, "  1 fn a() {}\n  2 fn b() {}|\n");

    let bare = export_stdout(&["snapshot", "--no-line-numbers"]);
    insta::assert_snapshot!(bare.trim_end(), @"fn a() {}\nfn b() {}|");
}

#[test]
fn ansi_snapshot_keeps_colors() {
    let ansi = export_stdout(&["snapshot", "--ansi", "--theme", "nord"]);
    assert!(ansi.contains("\x1b[48;2;46;52;64m"));
    assert!(ansi.contains("fn b() {}"));
}

#[test]
fn json_document_carries_settings() {
    let json = export_stdout(&["json", "--title", "Demo", "--theme", "Dracula"]);

    insta::with_settings!({filters => vec![
        (r#""\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z""#, "\"[TIMESTAMP]\""),
    ]}, {
        insta::assert_snapshot!(json, @r#"
{
  "code": "fn a() {}\nfn b() {}",
  "settings": {
    "speed": 40.0,
    "language": "javascript",
    "theme": "dracula",
    "title": "Demo"
  },
  "timestamp": "[TIMESTAMP]"
}
"#);
    });
}

#[test]
fn html_page_embeds_code_and_theme() {
    let html = export_stdout(&["html", "--theme", "nord", "--title", "<Demo>"]);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("#2e3440"));
    assert!(html.contains("&lt;Demo&gt;"));
    assert!(html.contains("fn b() {}"));
}

#[test]
fn cast_recording_parses_back() {
    let cast = export_stdout(&["cast", "--no-preamble"]);
    let file = AsciicastFile::parse_str(&cast).unwrap();

    assert_eq!(file.header.version, 3);
    assert_eq!(file.markers().len(), 1);
    assert!(file.duration() > Duration::ZERO);

    let last = file
        .events
        .iter()
        .rev()
        .find(|e| e.event_type == EventType::Output)
        .unwrap();
    assert!(last.data.contains("fn b() {}"));
    assert!(last.data.contains('|'));
}

#[test]
fn seeded_exports_are_reproducible() {
    let first = export_stdout(&["cast"]);
    let second = export_stdout(&["cast"]);
    let strip = |cast: &str| cast.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert_eq!(strip(&first), strip(&second));
}

// ============================================================================
// Output files
// ============================================================================

#[test]
fn default_filename_is_derived_from_title() {
    let dir = temp_dir();
    let work = temp_dir();
    termtype(dir.path())
        .current_dir(work.path())
        .args(["export", "cast", "--sample", "rust", "--title", "My Demo", "--no-preamble"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Exported terminal-recording-my-demo-"));

    let names: Vec<_> = fs::read_dir(work.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("terminal-recording-my-demo-"));
    assert!(names[0].ends_with(".cast"));
}

#[test]
fn explicit_output_path_is_written() {
    let dir = temp_dir();
    let out = dir.path().join("shot.txt");
    let out_arg = out.display().to_string();

    let (stdout, _stderr, code) = run_termtype(
        dir.path(),
        &["export", "snapshot", "--sample", "python", "--no-preamble", "-o", &out_arg],
    );

    assert_eq!(code, 0);
    assert!(stdout.contains("shot.txt"));
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.trim_end().ends_with('|'));
}

#[test]
fn file_extension_picks_language() {
    let dir = temp_dir();
    let input = dir.path().join("main.go");
    fs::write(&input, "package main").unwrap();
    let input_arg = input.display().to_string();

    let (stdout, _stderr, code) =
        run_termtype(dir.path(), &["export", "json", &input_arg, "-o", "-"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("\"language\": \"go\""));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unknown_sample_lists_available_languages() {
    let dir = temp_dir();
    let (_stdout, stderr, code) =
        run_termtype(dir.path(), &["export", "json", "--sample", "cobol"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("No sample for language 'cobol'"));
    assert!(stderr.contains("javascript"));
}

#[test]
fn zero_speed_is_rejected() {
    let dir = temp_dir();
    let (_stdout, stderr, code) = run_termtype(
        dir.path(),
        &["export", "json", "--sample", "rust", "--speed", "0", "-o", "-"],
    );

    assert_eq!(code, 1);
    assert!(stderr.contains("speed"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = temp_dir();
    let (_stdout, stderr, code) =
        run_termtype(dir.path(), &["export", "json", "nope.rs", "-o", "-"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("nope.rs"));
}
