//! Typing animator
//!
//! A single-threaded state machine that replays source text one character
//! at a time, optionally preceded by a scrambling loading-phrase preamble.
//!
//! # Architecture
//!
//! - `state`: run mode, reveal cursor, revealed buffer and source text
//! - `delay`: humanized per-character delay model
//! - `scramble`: staggered character-scramble transition
//! - `preamble`: loading phrases, hold timing and spinner
//! - `sequencer`: the [`Animator`] itself
//!
//! Time is virtual. All pending work lives in a [`Scheduler`](crate::scheduler::Scheduler)
//! owned by the animator, and the caller decides how fast the clock moves.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use termtype::animator::{Animator, AnimatorConfig, RunMode, SourceText};
//! use termtype::render::Recorder;
//!
//! let config = AnimatorConfig {
//!     seed: Some(7),
//!     ..AnimatorConfig::without_preamble(40.0)
//! };
//! let mut animator = Animator::new(config, Recorder::new()).unwrap();
//! animator.start(&Arc::new(SourceText::new("a\nbc"))).unwrap();
//! animator.run_until_idle(10_000);
//!
//! assert_eq!(animator.mode(), RunMode::Done);
//! assert_eq!(animator.revealed_text(), "a\nbc");
//! ```

mod delay;
mod error;
mod preamble;
mod scramble;
mod sequencer;
mod state;

pub use delay::{DelayModel, PauseKind};
pub use error::AnimatorError;
pub use preamble::{
    select_phrases, HoldOutcome, Preamble, PreambleConfig, Spinner, DEFAULT_PHRASES,
    SPINNER_FRAMES,
};
pub use scramble::{PositionStep, Scramble, ScrambleTiming};
pub use sequencer::{Animator, AnimatorConfig, StartOutcome};
pub use state::{revealed_text, RevealState, RevealedLine, RunMode, SourceText};

/// Generation of an animation run; bumped on every Start and Reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RunId(u64);

impl RunId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A scheduled wake-up. Each carries the run it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wake {
    /// Reveal one character or advance one line
    Tick(RunId),
    /// Advance one scramble position
    Flip(RunId, usize),
    /// A settled preamble phrase finished its hold
    Hold(RunId),
    /// Advance the spinner glyph
    Spinner(RunId),
}

impl Wake {
    fn run(self) -> RunId {
        match self {
            Self::Tick(run) | Self::Flip(run, _) | Self::Hold(run) | Self::Spinner(run) => run,
        }
    }
}
