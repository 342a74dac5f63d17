//! Export subcommand handler

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::cli::ExportArgs;
use termtype::export::{self, ExportSettings};
use termtype::theme::current_palette;

/// Render an export and write it to a file or stdout.
pub fn handle(args: ExportArgs) -> Result<()> {
    let (config, text) = super::prepare(&args.source, &args.style)?;

    let mut settings = ExportSettings::from_config(&config);
    settings.aspect_ratio = args.aspect_ratio;
    settings.ansi = args.ansi;

    let now = Local::now();
    let content = export::render(args.format, &text, &settings, now)?;

    let path = match args.output {
        Some(path) if path.as_os_str() == "-" => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }
        Some(path) => path,
        None => PathBuf::from(
            args.format
                .default_filename(&settings.title, settings.ansi, now)?,
        ),
    };

    std::fs::write(&path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "export written");

    let palette = current_palette();
    println!(
        "{} {} ({})",
        palette.success_text("Exported"),
        path.display(),
        humansize::format_size(content.len() as u64, humansize::DECIMAL)
    );
    Ok(())
}
