//! asciicast v3 recording of an animation run.

use std::sync::Arc;

use anyhow::Result;

use super::{run_to_completion, ExportSettings};
use crate::animator::{RunMode, SourceText};
use crate::asciicast::{AsciicastFile, CastBuilder, Header};
use crate::render::ansi::{self, CLEAR_SCREEN, HIDE_CURSOR};
use crate::render::{Frame, RenderSink};
use crate::theme::Theme;

/// Label of the marker placed where typing begins.
pub const TYPING_MARKER: &str = "typing";

/// Sink that redraws the whole screen into cast output events.
struct CastSink {
    builder: CastBuilder,
    theme: Theme,
    show_line_numbers: bool,
    cols: usize,
    typing_marked: bool,
    last_screen: String,
}

impl RenderSink for CastSink {
    fn render(&mut self, frame: &Frame<'_>) {
        if frame.mode == RunMode::Typing && !self.typing_marked {
            self.builder.marker(frame.at, TYPING_MARKER);
            self.typing_marked = true;
        }

        let lines = ansi::frame_lines(frame, &self.theme, self.show_line_numbers, self.cols);
        let screen = format!("{}{}", CLEAR_SCREEN, lines.join("\r\n"));
        if screen != self.last_screen {
            self.builder.output(frame.at, screen.as_str());
            self.last_screen = screen;
        }
    }
}

/// Run the animation in virtual time and record every frame.
pub fn record(
    source: &Arc<SourceText>,
    settings: &ExportSettings,
    timestamp: Option<i64>,
) -> Result<AsciicastFile> {
    let (cols, rows) = settings.screen_size(source);
    let mut header = Header::new(cols, rows);
    header.timestamp = timestamp;
    header.title = Some(settings.title.clone());

    let mut builder = CastBuilder::new(header);
    builder.output(std::time::Duration::ZERO, HIDE_CURSOR);

    let sink = CastSink {
        builder,
        theme: settings.theme.clone(),
        show_line_numbers: settings.show_line_numbers,
        cols: cols as usize,
        typing_marked: false,
        last_screen: String::new(),
    };
    let animator = run_to_completion(source, settings.animator.clone(), sink)?;
    let cast = animator.into_sink().builder.finish();
    tracing::debug!(events = cast.events.len(), duration = ?cast.duration(), "cast recorded");
    Ok(cast)
}
