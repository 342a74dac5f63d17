//! termtype: a fake terminal that types out code like a human would.
//!
//! The core is [`animator::Animator`], a single-threaded state machine
//! driven by a virtual clock ([`scheduler::Scheduler`]). Everything else
//! observes it through [`render::RenderSink`]: the interactive player in
//! [`tui`], and the exporters in [`export`].

pub mod animator;
pub mod asciicast;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod files;
pub mod logging;
pub mod render;
pub mod samples;
pub mod scheduler;
pub mod theme;
pub mod tui;

pub use animator::{Animator, AnimatorConfig, AnimatorError, RunMode, SourceText};
pub use config::Config;
