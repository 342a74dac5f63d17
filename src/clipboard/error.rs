//! Errors reported by [`Copy`](super::Copy).

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyText,

    #[error("No clipboard tool found. Install wl-clipboard, xclip or xsel.")]
    NoToolAvailable,

    #[error("Clipboard tool '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("Clipboard is only supported on macOS and Linux")]
    UnsupportedPlatform,
}
