//! The seam between `Copy` and the external clipboard programs.

use super::result::CopyMethod;

/// Something that can put text on the clipboard.
///
/// `Copy` asks each tool in turn; the first one that is installed and
/// succeeds wins.
pub trait CopyTool: Send + Sync {
    fn method(&self) -> CopyMethod;

    /// Name used in status and error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Cheap presence check, run before every attempt.
    fn is_available(&self) -> bool;

    /// Hand `text` to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The program ran and reported an error
    Failed(String),
    /// The program vanished between the presence check and the spawn
    NotFound,
}
