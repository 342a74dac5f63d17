//! Animator state types
//!
//! Contains the run mode enum, reveal cursor, revealed buffer records and
//! the immutable source text shared with the caller.

use std::fmt;

use serde::Serialize;

/// Current phase of an animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Nothing scheduled; waiting for Start
    #[default]
    Idle,
    /// Loading phrases are cycling before typing begins
    Preamble,
    /// Characters are being revealed
    Typing,
    /// Typing frozen; reveal position kept
    Paused,
    /// Every line revealed
    Done,
}

impl RunMode {
    /// Whether a run is in progress (scheduled work or a frozen schedule).
    pub fn is_active(self) -> bool {
        matches!(self, Self::Preamble | Self::Typing | Self::Paused)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Preamble => "loading",
            Self::Typing => "typing",
            Self::Paused => "paused",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of the next character to reveal.
///
/// Both indices count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RevealState {
    pub line_index: usize,
    pub char_index: usize,
}

/// One line of the revealed buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealedLine {
    /// 1-based line number
    pub line_number: usize,
    /// Prefix of the source line revealed so far
    pub content: String,
    /// True once every character of the line has been revealed
    pub complete: bool,
}

impl RevealedLine {
    pub fn new(line_number: usize) -> Self {
        Self {
            line_number,
            content: String::new(),
            complete: false,
        }
    }
}

/// Join the revealed lines with newlines.
pub fn revealed_text(lines: &[RevealedLine]) -> String {
    lines
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Immutable text replayed by the animator.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Trailing whitespace
/// at the end of the whole text is trimmed so the last line is never an
/// empty artifact of a final newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText {
    lines: Vec<Vec<char>>,
}

impl SourceText {
    pub fn new(text: &str) -> Self {
        let trimmed = text.trim_end();
        if trimmed.trim_start().is_empty() {
            return Self::default();
        }

        let lines = trimmed
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        Self { lines }
    }

    /// True when there is nothing to type.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Characters of line `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<&[char]> {
        self.lines.get(index).map(Vec::as_slice)
    }

    /// Character count of line `index` (0 past the end).
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, <[char]>::len)
    }

    /// Total characters excluding line breaks.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
