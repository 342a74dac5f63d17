//! Static exports of an animation
//!
//! - `html`: self-contained page that replays the typing in a browser
//! - `cast`: asciicast v3 recording produced in virtual time
//! - `snapshot`: the finished screen as plain or ANSI text
//! - `json`: the code plus the settings used to animate it

pub mod cast;
pub mod html;
pub mod json;
pub mod snapshot;

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::animator::{Animator, AnimatorConfig, RunMode, SourceText};
use crate::config::Config;
use crate::files::filename;
use crate::render::layout::GUTTER_WIDTH;
use crate::render::RenderSink;
use crate::theme::Theme;

/// Upper bound on scheduler steps for one export run.
const MAX_EXPORT_STEPS: usize = 5_000_000;

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Html,
    Cast,
    Snapshot,
    Json,
}

impl ExportFormat {
    pub fn extension(&self, ansi: bool) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Cast => "cast",
            Self::Snapshot if ansi => "ans",
            Self::Snapshot => "txt",
            Self::Json => "json",
        }
    }

    /// Word used in default filenames.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Html => "page",
            Self::Cast => "recording",
            Self::Snapshot => "screenshot",
            Self::Json => "config",
        }
    }

    /// Default output filename for a title.
    pub fn default_filename(&self, title: &str, ansi: bool, at: DateTime<Local>) -> Result<String> {
        Ok(filename::export_filename(
            self.kind(),
            title,
            at,
            self.extension(ansi),
        )?)
    }
}

/// Shape of the terminal body in the HTML export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum AspectRatio {
    #[default]
    Auto,
    #[value(name = "1-1")]
    Square,
    #[value(name = "3-2")]
    Classic,
    #[value(name = "16-9")]
    Wide,
}

impl AspectRatio {
    /// CSS `aspect-ratio` value, `None` for auto sizing.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Square => Some("1 / 1"),
            Self::Classic => Some("3 / 2"),
            Self::Wide => Some("16 / 9"),
        }
    }
}

/// Everything an export needs besides the text.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub title: String,
    pub language: String,
    pub theme: Theme,
    pub show_line_numbers: bool,
    pub aspect_ratio: AspectRatio,
    /// Color escapes in snapshots
    pub ansi: bool,
    pub animator: AnimatorConfig,
}

impl ExportSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.appearance.title.clone(),
            language: config.appearance.language.clone(),
            theme: config.theme(),
            show_line_numbers: config.appearance.show_line_numbers,
            aspect_ratio: AspectRatio::default(),
            ansi: false,
            animator: config.to_animator_config(),
        }
    }

    /// Screen size that fits the text, the gutter, the cursor and any
    /// loading phrase.
    pub fn screen_size(&self, source: &SourceText) -> (u32, u32) {
        let gutter = if self.show_line_numbers {
            GUTTER_WIDTH + 1
        } else {
            0
        };
        let text_width = (0..source.line_count())
            .filter_map(|i| source.line(i))
            .map(|line| line.iter().collect::<String>().width())
            .max()
            .unwrap_or(0);
        let phrase_width = self
            .animator
            .preamble
            .as_ref()
            .and_then(|p| p.phrases.iter().map(|s| s.width() + 2).max())
            .unwrap_or(0);
        let cols = (gutter + text_width.max(phrase_width) + 2).max(40);
        let rows = (source.line_count() + 1).max(10);
        (cols as u32, rows as u32)
    }
}

/// Render an export to a string.
pub fn render(
    format: ExportFormat,
    source: &Arc<SourceText>,
    settings: &ExportSettings,
    now: DateTime<Local>,
) -> Result<String> {
    if source.is_empty() {
        bail!("Nothing to export: the text is empty");
    }
    tracing::info!(?format, lines = source.line_count(), "exporting");
    match format {
        ExportFormat::Html => html::render(source, settings),
        ExportFormat::Cast => cast::record(source, settings, Some(now.timestamp()))?.to_string(),
        ExportFormat::Snapshot => snapshot::render(source, settings),
        ExportFormat::Json => json::render(source, settings, now),
    }
}

/// Drive an animator to completion in virtual time.
pub(crate) fn run_to_completion<S: RenderSink>(
    source: &Arc<SourceText>,
    config: AnimatorConfig,
    sink: S,
) -> Result<Animator<S>> {
    let mut animator = Animator::new(config, sink)?;
    animator.start(source)?;
    animator.run_until_idle(MAX_EXPORT_STEPS);
    if animator.mode() != RunMode::Done {
        bail!(
            "Animation did not finish within {} steps (stopped in {})",
            MAX_EXPORT_STEPS,
            animator.mode()
        );
    }
    Ok(animator)
}
