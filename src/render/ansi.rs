//! ANSI escape code rendering of frames.
//!
//! Used by the ANSI snapshot and the cast recording, which both need the
//! themed screen as a byte stream rather than a ratatui buffer.

use super::layout::{self, Row, RowKind, CURSOR};
use super::Frame;
use crate::theme::{ansi, Theme};

/// Clear the screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
/// Hide the terminal's own cursor; the frame draws its own.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Append one row with theme colors.
///
/// Rows are padded to `width` columns so the background fills the line.
pub fn row_to_ansi(row: &Row, theme: &Theme, width: usize, buf: &mut String) {
    let bg = theme.terminal_bg.ansi_bg();
    buf.push_str(&bg);

    if let Some(gutter) = &row.gutter {
        buf.push_str(ansi::DARK_GRAY);
        buf.push_str(&bg);
        buf.push_str(gutter);
        buf.push(' ');
    }

    let text_color = match row.kind {
        RowKind::Loading => theme.text_secondary,
        RowKind::Code | RowKind::Blank => theme.terminal_text,
    };
    buf.push_str(&text_color.ansi_fg());
    buf.push_str(&row.text);

    if row.cursor {
        buf.push_str(ansi::BOLD);
        buf.push_str(&theme.accent.ansi_fg());
        buf.push(CURSOR);
        buf.push_str(ansi::RESET);
        buf.push_str(&bg);
    }

    let used = row.width() + row.gutter.as_ref().map_or(0, |g| g.len() + 1);
    if width > used {
        buf.push_str(&" ".repeat(width - used));
    }
    buf.push_str(ansi::RESET);
}

/// Render a frame as ANSI-colored lines.
pub fn frame_lines(
    frame: &Frame<'_>,
    theme: &Theme,
    show_line_numbers: bool,
    width: usize,
) -> Vec<String> {
    layout::rows(frame, show_line_numbers)
        .iter()
        .map(|row| {
            let mut buf = String::new();
            row_to_ansi(row, theme, width, &mut buf);
            buf
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{RevealedLine, RunMode};
    use std::time::Duration;

    #[test]
    fn code_row_uses_terminal_colors_and_accent_cursor() {
        let theme = Theme::dracula();
        let lines = [RevealedLine {
            line_number: 1,
            content: "ab".to_string(),
            complete: false,
        }];
        let frame = Frame {
            at: Duration::ZERO,
            mode: RunMode::Typing,
            lines: &lines,
            preamble: None,
        };

        let rendered = frame_lines(&frame, &theme, true, 0);
        assert_eq!(rendered.len(), 1);
        let line = &rendered[0];
        assert!(line.starts_with(&theme.terminal_bg.ansi_bg()));
        assert!(line.contains("  1 "));
        assert!(line.contains(&format!("{}ab", theme.terminal_text.ansi_fg())));
        assert!(line.contains(&format!("{}|", theme.accent.ansi_fg())));
        assert!(line.ends_with(ansi::RESET));
    }

    #[test]
    fn rows_are_padded_to_width() {
        let theme = Theme::dark();
        let row = Row {
            kind: RowKind::Code,
            gutter: None,
            text: "abc".to_string(),
            cursor: false,
        };
        let mut buf = String::new();
        row_to_ansi(&row, &theme, 8, &mut buf);
        assert!(buf.contains("abc     \x1b[0m"));
    }
}
