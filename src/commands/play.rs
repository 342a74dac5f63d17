//! Play subcommand handler

use anyhow::{bail, Result};

use crate::cli::PlayArgs;
use termtype::tui::{PlayerApp, PlayerSettings};

/// Open the interactive player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("play needs an interactive terminal; try `termtype export snapshot` instead");
    }

    let (config, text) = super::prepare(&args.source, &args.style)?;
    let settings = PlayerSettings {
        title: config.appearance.title.clone(),
        language: config.appearance.language.clone(),
        theme: config.theme(),
        show_line_numbers: config.appearance.show_line_numbers,
        auto_start: config.animation.auto_start && !args.paused,
    };
    tracing::info!(theme = settings.theme.name, "opening player");

    let app = PlayerApp::new(text, config.to_animator_config(), settings)?;
    app.run()?;
    Ok(())
}
