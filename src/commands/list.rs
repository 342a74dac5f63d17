//! Samples and themes listings

use anyhow::Result;

use termtype::samples;
use termtype::theme::{current_palette, Theme};

/// List built-in samples with their line counts.
pub fn handle_samples() -> Result<()> {
    let palette = current_palette();
    for sample in samples::all() {
        let lines = sample.code.lines().count();
        println!(
            "{} {:<12} {}",
            palette.accent_text(&format!("{:<12}", sample.language)),
            sample.display_name(),
            palette.secondary_text(&format!("{} lines", lines))
        );
    }
    Ok(())
}

/// List themes with a color swatch.
pub fn handle_themes() -> Result<()> {
    let palette = current_palette();
    for theme in Theme::all() {
        println!(
            "{} {}",
            palette.accent_text(&format!("{:<10}", theme.name)),
            swatch(&theme, palette.enabled())
        );
    }
    Ok(())
}

/// Terminal background with the text and accent colors on it.
fn swatch(theme: &Theme, color: bool) -> String {
    if !color {
        return format!(
            "bg {}  text {}  accent {}",
            theme.terminal_bg.css(),
            theme.terminal_text.css(),
            theme.accent.css()
        );
    }
    format!(
        "{}{} code {}|{}",
        theme.terminal_bg.ansi_bg(),
        theme.terminal_text.ansi_fg(),
        theme.accent.ansi_fg(),
        termtype::theme::ansi::RESET
    )
}
