//! Config subcommands handler

use anyhow::{bail, Result};

use termtype::theme::current_palette;
use termtype::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", current_palette().primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    let path = Config::default().save()?;
    println!(
        "{} {}",
        current_palette().success_text("Wrote"),
        path.display()
    );
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let palette = current_palette();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        palette.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        bail!("Editor exited with {}", status);
    }

    // Catch mistakes while the file is still open in the user's mind
    if let Err(e) = Config::load() {
        println!("{}", palette.error_text(&format!("Warning: {:#}", e)));
    }
    Ok(())
}
