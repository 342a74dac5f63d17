//! Player screen layout and drawing.
//!
//! Drawing is a pure function of [`PlayerView`], so it can be exercised
//! against ratatui's `TestBackend`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::status_footer::{render_footer, render_status_line};
use crate::animator::RunMode;
use crate::render::layout::{self, Row, RowKind, CURSOR};
use crate::render::Snapshot;
use crate::samples::display_name;
use crate::theme::{traffic_lights, Theme};

/// Everything needed to draw one player screen.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub title: &'a str,
    pub language: &'a str,
    pub theme: &'a Theme,
    pub show_line_numbers: bool,
    /// Latest animator frame; `None` before anything was emitted
    pub snapshot: Option<&'a Snapshot>,
    pub mode: RunMode,
    /// Transient message (copy results, errors)
    pub status: Option<&'a str>,
}

/// Split the screen into title bar, body, status line and footer.
pub fn screen_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Key hints for a mode.
pub fn footer_keys(mode: RunMode) -> Vec<(&'static str, &'static str)> {
    let mut keys = match mode {
        RunMode::Idle | RunMode::Done => vec![("Enter", "start")],
        RunMode::Preamble => vec![],
        RunMode::Typing => vec![("Space", "pause")],
        RunMode::Paused => vec![("Space", "resume")],
    };
    keys.extend([("+/-", "speed"), ("r", "reset"), ("c", "copy"), ("q", "quit")]);
    keys
}

/// The last `height` rows, so the line being typed stays in view.
pub fn visible_tail(rows: &[Row], height: usize) -> &[Row] {
    &rows[rows.len().saturating_sub(height)..]
}

/// Styled lines for display rows.
pub fn body_lines(rows: &[Row], theme: &Theme) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(4);
            if let Some(gutter) = &row.gutter {
                spans.push(Span::styled(format!("{} ", gutter), theme.gutter_style()));
            }
            let text_style = match row.kind {
                RowKind::Loading => theme.hint_style(),
                RowKind::Code | RowKind::Blank => theme.code_style(),
            };
            spans.push(Span::styled(row.text.clone(), text_style));
            if row.cursor {
                spans.push(Span::styled(CURSOR.to_string(), theme.cursor_style()));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_title_bar(frame: &mut Frame, area: Rect, view: &PlayerView) {
    let theme = view.theme;
    let bar = Style::default().bg(theme.bg_tertiary.color());
    let dot = |color: crate::theme::Rgb| Span::styled("● ", bar.fg(color.color()));

    let left = Line::from(vec![
        Span::styled(" ", bar),
        dot(traffic_lights::CLOSE),
        dot(traffic_lights::MINIMIZE),
        dot(traffic_lights::MAXIMIZE),
        Span::styled(format!(" {}", view.title), theme.header_style()),
    ]);
    frame.render_widget(Paragraph::new(left).style(bar), area);

    let right = Line::from(Span::styled(
        format!("{} ", display_name(view.language)),
        theme.hint_style().bg(theme.bg_tertiary.color()),
    ));
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

fn render_body(frame: &mut Frame, area: Rect, view: &PlayerView) {
    let theme = view.theme;
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(theme.border_style().bg(theme.terminal_bg.color()))
        .style(Style::default().bg(theme.terminal_bg.color()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = match view.snapshot {
        Some(snapshot) => layout::rows(&snapshot.as_frame(), view.show_line_numbers),
        None => vec![Row {
            kind: RowKind::Blank,
            gutter: None,
            text: String::new(),
            cursor: true,
        }],
    };
    let visible = visible_tail(&rows, inner.height as usize);
    frame.render_widget(Paragraph::new(body_lines(visible, theme)), inner);
}

/// Draw the whole player screen.
pub fn render_player(frame: &mut Frame, view: &PlayerView) {
    let [title, body, status, footer] = screen_layout(frame.area());
    render_title_bar(frame, title, view);
    render_body(frame, body, view);

    let status_text = match view.status {
        Some(message) => format!(" {} | {}", view.mode.label(), message),
        None => format!(" {}", view.mode.label()),
    };
    render_status_line(frame, status, &status_text, view.theme);
    render_footer(frame, footer, &footer_keys(view.mode), view.theme);
}
