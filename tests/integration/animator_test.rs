//! Animator behavior through the public API

use std::time::Duration;

use termtype::animator::{AnimatorConfig, PreambleConfig, RunMode, StartOutcome};

use crate::helpers::{seeded_animator, source};

const CODE: &str = "fn main() {\n    println!(\"hi\");\n}";

#[test]
fn same_seed_same_timeline() {
    let timeline = |seed| {
        let mut animator = seeded_animator(seed, AnimatorConfig::default());
        animator.start(&source(CODE)).unwrap();
        animator.run_until_idle(1_000_000);
        animator
            .sink()
            .snapshots()
            .iter()
            .map(|s| (s.at, s.text()))
            .collect::<Vec<_>>()
    };

    assert_eq!(timeline(42), timeline(42));
    assert_ne!(timeline(42), timeline(43));
}

#[test]
fn every_character_is_revealed_in_order() {
    let mut animator = seeded_animator(1, AnimatorConfig::without_preamble(30.0));
    animator.start(&source(CODE)).unwrap();
    animator.run_until_idle(100_000);

    assert_eq!(animator.mode(), RunMode::Done);
    assert_eq!(animator.revealed_text(), CODE);
    assert_eq!(animator.sink().reveal_sequence(), CODE);
    assert!(animator.lines().iter().all(|line| line.complete));
}

#[test]
fn preamble_runs_before_any_code_appears() {
    let config = AnimatorConfig {
        preamble: Some(PreambleConfig::default().with_phrases(["Warming up", "Almost"])),
        ..AnimatorConfig::without_preamble(20.0)
    };
    let mut animator = seeded_animator(3, config);
    animator.start(&source("x")).unwrap();
    assert_eq!(animator.mode(), RunMode::Preamble);

    animator.run_until_idle(1_000_000);
    let snapshots = animator.sink().snapshots();
    let first_typing = snapshots
        .iter()
        .position(|s| s.mode == RunMode::Typing)
        .unwrap();

    assert!(snapshots[..first_typing]
        .iter()
        .all(|s| s.lines.is_empty() && s.preamble.is_some()));
    assert!(snapshots[first_typing..]
        .iter()
        .all(|s| s.preamble.is_none()));
    assert_eq!(animator.revealed_text(), "x");
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut animator = seeded_animator(9, AnimatorConfig::without_preamble(40.0));
    animator.start(&source("abcdefghij")).unwrap();
    animator.advance_to(Duration::from_millis(150));

    assert!(animator.pause());
    let frozen = animator.revealed_text();
    animator.advance_to(Duration::from_secs(30));
    assert_eq!(animator.revealed_text(), frozen);
    assert_eq!(animator.mode(), RunMode::Paused);

    assert_eq!(animator.start(&source("ignored")).unwrap(), StartOutcome::Resumed);
    animator.run_until_idle(10_000);
    assert_eq!(animator.revealed_text(), "abcdefghij");
}

#[test]
fn reset_then_restart_replays_from_the_top() {
    let mut animator = seeded_animator(5, AnimatorConfig::without_preamble(40.0));
    let text = source("first\nsecond");
    animator.start(&text).unwrap();
    animator.advance_to(Duration::from_millis(300));
    animator.reset();

    assert_eq!(animator.mode(), RunMode::Idle);
    assert!(animator.lines().is_empty());
    assert_eq!(animator.pending(), 0);

    animator.start(&source("other")).unwrap();
    animator.run_until_idle(10_000);
    assert_eq!(animator.revealed_text(), "other");
}

#[test]
fn empty_text_is_rejected_without_state_change() {
    let mut animator = seeded_animator(1, AnimatorConfig::default());
    assert!(animator.start(&source(" \n\t\n")).is_err());
    assert_eq!(animator.mode(), RunMode::Idle);
    assert!(animator.sink().snapshots().is_empty());
}
