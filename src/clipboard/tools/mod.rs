//! Platform-specific clipboard tools.
//!
//! Every tool reads the text from stdin; they differ only in the binary
//! and arguments.

use std::io::Write;
use std::process::{Command, Stdio};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// A clipboard binary that accepts text on stdin.
#[derive(Debug, Clone, Copy)]
pub struct PipeTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
}

impl PipeTool {
    /// macOS pasteboard.
    pub const fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            program: "pbcopy",
            args: &[],
        }
    }

    /// X11 clipboard via xclip.
    pub const fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            program: "xclip",
            args: &["-selection", "clipboard"],
        }
    }

    /// X11 clipboard via xsel.
    pub const fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            program: "xsel",
            args: &["--clipboard", "--input"],
        }
    }

    /// Wayland clipboard.
    pub const fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            program: "wl-copy",
            args: &[],
        }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    pub fn args(&self) -> &'static [&'static str] {
        self.args
    }

    /// Check if the binary is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        match self.method {
            CopyMethod::Pbcopy => cfg!(target_os = "macos"),
            CopyMethod::WlCopy => {
                cfg!(target_os = "linux")
                    && std::env::var_os("WAYLAND_DISPLAY").is_some()
                    && self.tool_exists()
            }
            CopyMethod::Xclip | CopyMethod::Xsel => {
                cfg!(target_os = "linux") && self.tool_exists()
            }
        }
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!("{} failed", self.program)))
        }
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(PipeTool::pbcopy())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(PipeTool::wl_copy()),
            Box::new(PipeTool::xclip()),
            Box::new(PipeTool::xsel()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xclip_targets_the_clipboard_selection() {
        let tool = PipeTool::xclip();
        assert_eq!(tool.program(), "xclip");
        assert_eq!(tool.args(), ["-selection", "clipboard"]);
        assert_eq!(tool.name(), "xclip");
    }

    #[test]
    fn missing_binary_reports_not_found() {
        let tool = PipeTool {
            method: CopyMethod::Xsel,
            program: "termtype-no-such-clipboard-tool",
            args: &[],
        };
        assert_eq!(tool.try_copy_text("x"), Err(CopyToolError::NotFound));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_prefers_wayland_then_x11() {
        let names: Vec<_> = platform_tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["wl-copy", "xclip", "xsel"]);
    }
}
