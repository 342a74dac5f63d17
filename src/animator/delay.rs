//! Humanized per-character typing delays.
//!
//! A delay is the configured speed scaled by a uniform jitter, then
//! stretched again after punctuation, whitespace and opening brackets.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

/// Jitter applied to every character.
const BASE_JITTER: Range<f64> = 0.5..1.5;
/// Stretch after sentence-ending punctuation.
const SENTENCE_PAUSE: Range<f64> = 3.5..5.5;
/// Stretch after whitespace and closing punctuation.
const SHORT_PAUSE: Range<f64> = 2.0..3.5;
/// Stretch after an opening bracket.
const BRACKET_PAUSE: Range<f64> = 1.8..2.8;
/// Pause between the end of one line and the start of the next.
const LINE_BREAK: Range<f64> = 3.0..5.0;

const SENTENCE_CHARS: &[char] = &['.', '!', '?', ';'];
const PAUSE_CHARS: &[char] = &[' ', ',', ';', '.', ':', '!', '?', ')', '}', ']', '>', '\n'];
const OPEN_BRACKETS: &[char] = &['(', '{', '['];

/// Category of pause a character triggers after it is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    Sentence,
    Short,
    Bracket,
    None,
}

impl PauseKind {
    pub fn of(c: char) -> Self {
        if SENTENCE_CHARS.contains(&c) {
            Self::Sentence
        } else if PAUSE_CHARS.contains(&c) {
            Self::Short
        } else if OPEN_BRACKETS.contains(&c) {
            Self::Bracket
        } else {
            Self::None
        }
    }

    fn stretch(self) -> Option<Range<f64>> {
        match self {
            Self::Sentence => Some(SENTENCE_PAUSE),
            Self::Short => Some(SHORT_PAUSE),
            Self::Bracket => Some(BRACKET_PAUSE),
            Self::None => None,
        }
    }
}

/// Computes typing delays from a base speed in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayModel {
    speed_ms: f64,
}

impl DelayModel {
    /// `speed_ms` must be positive and finite; callers validate it.
    pub fn new(speed_ms: f64) -> Self {
        Self { speed_ms }
    }

    pub fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    /// Delay before the character after `current` is revealed.
    ///
    /// `_next` is the upcoming character, if any; it does not affect the
    /// result today.
    pub fn char_delay<R: Rng + ?Sized>(
        &self,
        current: char,
        _next: Option<char>,
        rng: &mut R,
    ) -> Duration {
        let base = self.speed_ms * rng.random_range(BASE_JITTER);
        let ms = match PauseKind::of(current).stretch() {
            Some(range) => base * rng.random_range(range),
            None => base,
        };
        to_duration(ms)
    }

    /// Delay between a completed line and the start of the next one.
    pub fn line_break_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        to_duration(self.speed_ms * rng.random_range(LINE_BREAK))
    }
}

fn to_duration(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}
