//! Render sinks and frame layout
//!
//! The animator emits a [`Frame`] after every step that changes what is on
//! screen. Sinks decide what to do with it: the interactive player draws it,
//! the cast exporter encodes it, and [`Recorder`] keeps owned snapshots.
//!
//! - `layout`: turns a frame into display rows (gutter, cursor, preamble line)
//! - `ansi`: themed escape-code rendering of those rows

pub mod ansi;
pub mod layout;

use std::time::Duration;

use serde::Serialize;

use crate::animator::{revealed_text, RevealedLine, RunMode};

/// Preamble line contents at the moment a frame was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreambleView {
    pub spinner: char,
    pub text: String,
}

/// Borrowed view of the animator after one step.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Virtual time since the animator was created
    pub at: Duration,
    pub mode: RunMode,
    pub lines: &'a [RevealedLine],
    pub preamble: Option<&'a PreambleView>,
}

impl Frame<'_> {
    /// Revealed text with lines joined by newlines.
    pub fn text(&self) -> String {
        revealed_text(self.lines)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            at: self.at,
            mode: self.mode,
            lines: self.lines.to_vec(),
            preamble: self.preamble.cloned(),
        }
    }
}

/// Receives frames from the animator.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Sink that drops every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &Frame<'_>) {}
}

/// Owned copy of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub at: Duration,
    pub mode: RunMode,
    pub lines: Vec<RevealedLine>,
    pub preamble: Option<PreambleView>,
}

impl Snapshot {
    pub fn text(&self) -> String {
        revealed_text(&self.lines)
    }

    pub fn as_frame(&self) -> Frame<'_> {
        Frame {
            at: self.at,
            mode: self.mode,
            lines: &self.lines,
            preamble: self.preamble.as_ref(),
        }
    }
}

/// Sink that records every frame it receives.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Snapshots taken while typing, in order.
    pub fn typing(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter().filter(|s| s.mode == RunMode::Typing)
    }

    /// The characters revealed across the recording, in reveal order.
    ///
    /// A line break is reported when a new line record appears.
    pub fn reveal_sequence(&self) -> String {
        let mut sequence = String::new();
        let mut seen = String::new();
        for snapshot in &self.snapshots {
            let text = snapshot.text();
            if let Some(added) = text.strip_prefix(seen.as_str()) {
                sequence.push_str(added);
                seen = text;
            }
        }
        sequence
    }
}

impl RenderSink for Recorder {
    fn render(&mut self, frame: &Frame<'_>) {
        self.snapshots.push(frame.to_snapshot());
    }
}

/// Sink that keeps only the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct Latest {
    snapshot: Option<Snapshot>,
    frames: usize,
}

impl Latest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Frames received so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderSink for Latest {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.snapshot = Some(frame.to_snapshot());
    }
}
