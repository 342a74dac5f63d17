//! Clipboard support
//!
//! Copies revealed text to the system clipboard by piping it into the
//! first available platform tool.

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
