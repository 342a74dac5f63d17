//! Copy operation results and method identifiers.

/// The result of a clipboard copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    /// Bytes written after trimming
    pub size_bytes: usize,
    pub lines: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, text: &str) -> Self {
        Self {
            tool,
            size_bytes: text.len(),
            lines: text.lines().count(),
        }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        let noun = if self.lines == 1 { "line" } else { "lines" };
        format!(
            "Copied {} {} ({}) to clipboard via {}",
            self.lines,
            noun,
            humansize::format_size(self.size_bytes as u64, humansize::DECIMAL),
            self.tool.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_counts_lines_and_bytes() {
        let result = CopyResult::new(CopyMethod::Xclip, "fn main() {\n}");
        assert_eq!(result.lines, 2);
        assert_eq!(result.size_bytes, 13);
        assert_eq!(
            result.message(),
            "Copied 2 lines (13 B) to clipboard via xclip"
        );
    }

    #[test]
    fn message_uses_singular_for_one_line() {
        let result = CopyResult::new(CopyMethod::Pbcopy, "x");
        assert!(result.message().starts_with("Copied 1 line ("));
    }
}
