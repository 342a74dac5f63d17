//! Copy subcommand handler

use anyhow::Result;

use crate::cli::{SourceArgs, StyleArgs};
use termtype::clipboard::Copy;
use termtype::theme::current_palette;

/// Copy the text to the system clipboard.
#[cfg(not(tarpaulin_include))]
pub fn handle(source: &SourceArgs) -> Result<()> {
    let (_, text) = super::prepare(source, &StyleArgs::default())?;
    let result = Copy::new().text(&text.text())?;
    println!("{}", current_palette().success_text(&result.message()));
    Ok(())
}
