//! Frame layout: line-number gutter, cursor placement and the preamble row.

use unicode_width::UnicodeWidthStr;

use super::Frame;
use crate::animator::RunMode;

/// Cursor glyph drawn after the line being typed.
pub const CURSOR: char = '|';

/// Width of the line-number gutter.
pub const GUTTER_WIDTH: usize = 3;

/// What a display row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A revealed source line
    Code,
    /// The spinner and scrambling loading phrase
    Loading,
    /// Empty screen with only a cursor
    Blank,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    /// Right-aligned line number, when line numbers are shown
    pub gutter: Option<String>,
    pub text: String,
    pub cursor: bool,
}

impl Row {
    /// Display width of the text including the cursor.
    pub fn width(&self) -> usize {
        self.text.width() + usize::from(self.cursor)
    }

    /// Plain-text rendering: `gutter text cursor`.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        if let Some(gutter) = &self.gutter {
            out.push_str(gutter);
            out.push(' ');
        }
        out.push_str(&self.text);
        if self.cursor {
            out.push(CURSOR);
        }
        out
    }
}

/// Format a 1-based line number for the gutter.
pub fn gutter(line_number: usize) -> String {
    format!("{:>width$}", line_number, width = GUTTER_WIDTH)
}

/// Lay out a frame as display rows.
pub fn rows(frame: &Frame<'_>, show_line_numbers: bool) -> Vec<Row> {
    let number = |n: usize| show_line_numbers.then(|| gutter(n));

    if let Some(preamble) = frame.preamble {
        return vec![Row {
            kind: RowKind::Loading,
            gutter: number(1),
            text: format!("{} {}", preamble.spinner, preamble.text),
            cursor: false,
        }];
    }

    if frame.lines.is_empty() {
        let cursor = matches!(frame.mode, RunMode::Idle | RunMode::Done);
        return vec![Row {
            kind: RowKind::Blank,
            gutter: None,
            text: String::new(),
            cursor,
        }];
    }

    let last = frame.lines.len() - 1;
    frame
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let cursor = i == last
                && match frame.mode {
                    RunMode::Typing | RunMode::Paused => !line.complete,
                    RunMode::Done => true,
                    RunMode::Idle | RunMode::Preamble => false,
                };
            Row {
                kind: RowKind::Code,
                gutter: number(line.line_number),
                text: line.content.clone(),
                cursor,
            }
        })
        .collect()
}

/// Plain-text rendering of a whole frame, one row per line.
pub fn to_plain(frame: &Frame<'_>, show_line_numbers: bool) -> String {
    rows(frame, show_line_numbers)
        .iter()
        .map(Row::to_plain)
        .collect::<Vec<_>>()
        .join("\n")
}
