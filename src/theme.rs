//! Theme configuration for the player, exports and CLI
//!
//! Centralizes all palettes in one place. Each theme provides ratatui
//! styles (for the player), CSS hex colors (for HTML export) and ANSI
//! escape codes (for CLI output and ANSI snapshots).

use ratatui::style::{Color, Modifier, Style};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// CSS hex notation.
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    /// ANSI truecolor foreground escape.
    pub fn ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// ANSI truecolor background escape.
    pub fn ansi_bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// Names of the built-in themes, in display order.
pub const THEME_NAMES: &[&str] = &["dark", "light", "claude", "dracula", "monokai", "nord"];

/// Terminal theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Page background
    pub bg_primary: Rgb,
    /// Panel background
    pub bg_secondary: Rgb,
    /// Title bar background
    pub bg_tertiary: Rgb,
    pub text_primary: Rgb,
    /// Dimmed text (title, line numbers, hints)
    pub text_secondary: Rgb,
    /// Cursor and highlights
    pub accent: Rgb,
    pub border: Rgb,
    pub terminal_bg: Rgb,
    pub terminal_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Look up a theme by name, falling back to `dark`.
    pub fn by_name(name: &str) -> Self {
        Self::find(name).unwrap_or_default()
    }

    /// Look up a theme by name (case-insensitive).
    pub fn find(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "claude" => Some(Self::claude()),
            "dracula" => Some(Self::dracula()),
            "monokai" => Some(Self::monokai()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        THEME_NAMES.iter().map(|name| Self::by_name(name)).collect()
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg_primary: Rgb::hex(0x1a1a1a),
            bg_secondary: Rgb::hex(0x2d2d2d),
            bg_tertiary: Rgb::hex(0x3a3a3a),
            text_primary: Rgb::hex(0xe0e0e0),
            text_secondary: Rgb::hex(0xb0b0b0),
            accent: Rgb::hex(0xe0e0e0),
            border: Rgb::hex(0x404040),
            terminal_bg: Rgb::hex(0x1e1e1e),
            terminal_text: Rgb::hex(0xe0e0e0),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            bg_primary: Rgb::hex(0xf5f5f5),
            bg_secondary: Rgb::hex(0xffffff),
            bg_tertiary: Rgb::hex(0xe0e0e0),
            text_primary: Rgb::hex(0x333333),
            text_secondary: Rgb::hex(0x666666),
            accent: Rgb::hex(0x007acc),
            border: Rgb::hex(0xd0d0d0),
            terminal_bg: Rgb::hex(0xffffff),
            terminal_text: Rgb::hex(0x333333),
        }
    }

    pub fn claude() -> Self {
        Self {
            name: "claude",
            bg_primary: Rgb::hex(0x1a1a1a),
            bg_secondary: Rgb::hex(0x2b2b2b),
            bg_tertiary: Rgb::hex(0x3a3a3a),
            text_primary: Rgb::hex(0xe8e8e8),
            text_secondary: Rgb::hex(0x9b9b9b),
            accent: Rgb::hex(0xe8e8e8),
            border: Rgb::hex(0x404040),
            terminal_bg: Rgb::hex(0x1f1f1f),
            terminal_text: Rgb::hex(0xe8e8e8),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            bg_primary: Rgb::hex(0x282a36),
            bg_secondary: Rgb::hex(0x44475a),
            bg_tertiary: Rgb::hex(0x6272a4),
            text_primary: Rgb::hex(0xf8f8f2),
            text_secondary: Rgb::hex(0x9fa1b0),
            accent: Rgb::hex(0xff79c6),
            border: Rgb::hex(0x6272a4),
            terminal_bg: Rgb::hex(0x282a36),
            terminal_text: Rgb::hex(0x50fa7b),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai",
            bg_primary: Rgb::hex(0x272822),
            bg_secondary: Rgb::hex(0x3e3d32),
            bg_tertiary: Rgb::hex(0x49483e),
            text_primary: Rgb::hex(0xf8f8f2),
            text_secondary: Rgb::hex(0xcfcfc2),
            accent: Rgb::hex(0x66d9ef),
            border: Rgb::hex(0x49483e),
            terminal_bg: Rgb::hex(0x272822),
            terminal_text: Rgb::hex(0xa6e22e),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord",
            bg_primary: Rgb::hex(0x2e3440),
            bg_secondary: Rgb::hex(0x3b4252),
            bg_tertiary: Rgb::hex(0x434c5e),
            text_primary: Rgb::hex(0xeceff4),
            text_secondary: Rgb::hex(0xd8dee9),
            accent: Rgb::hex(0x88c0d0),
            border: Rgb::hex(0x4c566a),
            terminal_bg: Rgb::hex(0x2e3440),
            terminal_text: Rgb::hex(0xa3be8c),
        }
    }

    // Style helpers

    /// Style for revealed code.
    pub fn code_style(&self) -> Style {
        Style::default()
            .fg(self.terminal_text.color())
            .bg(self.terminal_bg.color())
    }

    /// Style for the line-number gutter.
    pub fn gutter_style(&self) -> Style {
        Style::default()
            .fg(self.text_secondary.color())
            .bg(self.terminal_bg.color())
            .add_modifier(Modifier::DIM)
    }

    /// Style for the typing cursor.
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.accent.color())
            .bg(self.terminal_bg.color())
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the title bar.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text_secondary.color())
            .bg(self.bg_tertiary.color())
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the frame border.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border.color())
    }

    /// Style for footer hints.
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_secondary.color())
    }

    /// Style for highlighted footer keys.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent.color())
            .add_modifier(Modifier::BOLD)
    }
}

/// Fixed colors for the title bar dots.
pub mod traffic_lights {
    use super::Rgb;

    pub const CLOSE: Rgb = Rgb::hex(0xff5f56);
    pub const MINIMIZE: Rgb = Rgb::hex(0xffbd2e);
    pub const MAXIMIZE: Rgb = Rgb::hex(0x27c93f);
}

/// Basic ANSI codes for CLI output.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

/// Text colors for CLI messages, independent of the terminal theme.
#[derive(Debug, Clone, Copy)]
pub struct CliPalette {
    enabled: bool,
}

impl CliPalette {
    /// Colors are disabled when `NO_COLOR` is set.
    pub fn detect() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(ansi::BOLD, text)
    }
}

/// CLI palette for the current process.
pub fn current_palette() -> CliPalette {
    CliPalette::detect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.name, "dark");
        assert_eq!(theme.terminal_bg, Rgb::hex(0x1e1e1e));
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::by_name("solarized").name, "dark");
        assert!(Theme::find("solarized").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name(" NORD ").name, "nord");
    }

    #[test]
    fn every_listed_theme_resolves() {
        let names: Vec<_> = Theme::all().iter().map(|t| t.name).collect();
        assert_eq!(names, THEME_NAMES);
    }

    #[test]
    fn hex_and_css_round_trip() {
        let color = Rgb::hex(0xff79c6);
        assert_eq!(color, Rgb(0xff, 0x79, 0xc6));
        assert_eq!(color.css(), "#ff79c6");
        assert_eq!(color.color(), Color::Rgb(255, 121, 198));
    }

    #[test]
    fn ansi_escapes_use_truecolor() {
        let color = Rgb(1, 2, 3);
        assert_eq!(color.ansi_fg(), "\x1b[38;2;1;2;3m");
        assert_eq!(color.ansi_bg(), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn style_helpers_use_theme_colors() {
        let theme = Theme::monokai();
        assert_eq!(theme.code_style().fg, Some(Color::Rgb(0xa6, 0xe2, 0x2e)));
        assert_eq!(theme.cursor_style().fg, Some(theme.accent.color()));
        assert_eq!(theme.header_style().bg, Some(theme.bg_tertiary.color()));
    }

    #[test]
    fn disabled_palette_returns_plain_text() {
        let palette = CliPalette { enabled: false };
        assert_eq!(palette.error_text("oops"), "oops");
        let palette = CliPalette { enabled: true };
        let painted = palette.success_text("ok");
        assert!(painted.starts_with(ansi::GREEN));
        assert!(painted.ends_with(ansi::RESET));
    }
}
