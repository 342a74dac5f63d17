//! Diagnostic logging setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "TERMTYPE_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// The screen belongs to the player; drop everything
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: a log file always wins, and an interactive screen
    /// without one gets no logging.
    pub fn choose(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `-v` flags win, then `TERMTYPE_LOG`, then `warn`.
pub fn build_filter(verbosity: u8, env: Option<&str>) -> EnvFilter {
    let fallback = || EnvFilter::new(level_for(verbosity));
    if verbosity > 0 {
        return fallback();
    }
    env.and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(fallback)
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(verbosity, env.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn env_directive_applies_without_flags() {
        let filter = build_filter(0, Some("termtype=debug"));
        assert_eq!(filter.to_string(), "termtype=debug");
    }

    #[test]
    fn flags_override_env() {
        let filter = build_filter(2, Some("error"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn invalid_env_falls_back_to_warn() {
        let filter = build_filter(0, Some("termtype=loud"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn interactive_sessions_log_only_to_files() {
        let path = PathBuf::from("/tmp/termtype.log");
        assert_eq!(LogTarget::choose(None, true), LogTarget::Disabled);
        assert_eq!(LogTarget::choose(None, false), LogTarget::Stderr);
        assert_eq!(
            LogTarget::choose(Some(&path), true),
            LogTarget::File(path.as_path())
        );
    }
}
