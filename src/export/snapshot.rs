//! Final-frame snapshot as plain or ANSI text.

use std::sync::Arc;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use super::{run_to_completion, ExportSettings};
use crate::animator::SourceText;
use crate::render::{ansi, layout, Latest};
use crate::samples::display_name;
use crate::theme::{self, traffic_lights, Theme};

/// Run the animation to the end and render the finished screen.
pub fn render(source: &Arc<SourceText>, settings: &ExportSettings) -> Result<String> {
    let animator = run_to_completion(source, settings.animator.clone(), Latest::new())?;
    let snapshot = animator
        .sink()
        .get()
        .cloned()
        .context("Animation produced no frames")?;
    let frame = snapshot.as_frame();

    if !settings.ansi {
        let mut out = layout::to_plain(&frame, settings.show_line_numbers);
        out.push('\n');
        return Ok(out);
    }

    let (cols, _) = settings.screen_size(source);
    let cols = cols as usize;
    let mut out = title_bar(&settings.theme, &settings.title, &settings.language, cols);
    out.push('\n');
    for line in ansi::frame_lines(&frame, &settings.theme, settings.show_line_numbers, cols) {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Window header: traffic lights, title on the left, language on the right.
pub fn title_bar(theme: &Theme, title: &str, language: &str, cols: usize) -> String {
    let bg = theme.bg_tertiary.ansi_bg();
    let language = display_name(language);
    let mut out = String::new();
    out.push_str(&bg);
    for dot in [
        traffic_lights::CLOSE,
        traffic_lights::MINIMIZE,
        traffic_lights::MAXIMIZE,
    ] {
        out.push_str(&dot.ansi_fg());
        out.push('●');
        out.push(' ');
    }
    out.push_str(&theme.text_secondary.ansi_fg());
    out.push_str(theme::ansi::BOLD);
    out.push(' ');
    out.push_str(title);

    let used = 6 + 1 + title.width() + language.width();
    let gap = cols.saturating_sub(used).max(1);
    out.push_str(&" ".repeat(gap));
    out.push_str(&language);
    out.push_str(theme::ansi::RESET);
    out
}
