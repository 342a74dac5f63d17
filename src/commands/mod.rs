//! Subcommand handlers
//!
//! Handlers return `anyhow::Result`; `main` prints the error chain.

pub mod config;
pub mod copy;
pub mod export;
pub mod list;
pub mod play;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::cli::{SourceArgs, StyleArgs};
use termtype::animator::SourceText;
use termtype::samples;
use termtype::Config;

/// Text to animate plus the language label it implies.
#[derive(Debug)]
pub struct LoadedSource {
    pub text: Arc<SourceText>,
    pub language: Option<&'static str>,
}

/// Read the text from a file, stdin, or a built-in sample.
pub fn load_source(args: &SourceArgs, config: &Config) -> Result<LoadedSource> {
    let (raw, language) = match (&args.file, &args.sample) {
        (Some(file), _) if file == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            (buf, None)
        }
        (Some(file), _) => {
            let path = Path::new(file);
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let language = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(samples::language_for_extension);
            (text, language)
        }
        (None, sample) => {
            let language = sample
                .as_deref()
                .unwrap_or(config.appearance.language.as_str());
            let Some(sample) = samples::find(language) else {
                let known: Vec<_> = samples::languages().collect();
                bail!(
                    "No sample for language '{}'. Available: {}",
                    language,
                    known.join(", ")
                );
            };
            (sample.code.to_string(), Some(sample.language))
        }
    };

    let text = SourceText::new(&raw);
    if text.is_empty() {
        bail!("Nothing to type: the text is empty");
    }
    tracing::debug!(lines = text.line_count(), ?language, "loaded source");
    Ok(LoadedSource {
        text: Arc::new(text),
        language,
    })
}

/// Load the config, apply flags, and read the text.
///
/// A language detected from the file name is used unless `--language` is given.
pub fn prepare(source: &SourceArgs, style: &StyleArgs) -> Result<(Config, Arc<SourceText>)> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, style);
    config.validate()?;

    let loaded = load_source(source, &config)?;
    if style.language.is_none() {
        if let Some(language) = loaded.language {
            config.appearance.language = language.to_string();
        }
    }
    Ok((config, loaded.text))
}

/// Apply one-off flags on top of the file values.
pub fn apply_overrides(config: &mut Config, style: &StyleArgs) {
    if let Some(speed) = style.speed {
        config.animation.speed = speed;
    }
    if let Some(seed) = style.seed {
        config.animation.seed = Some(seed);
    }
    if style.no_preamble {
        config.animation.preamble = false;
    }
    if let Some(theme) = &style.theme {
        config.appearance.theme = theme.clone();
    }
    if let Some(title) = &style.title {
        config.appearance.title = title.clone();
    }
    if let Some(language) = &style.language {
        config.appearance.language = language.clone();
    }
    if style.no_line_numbers {
        config.appearance.show_line_numbers = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let mut config = Config::default();
        let style = StyleArgs {
            speed: Some(12.0),
            theme: Some("nord".to_string()),
            no_preamble: true,
            no_line_numbers: true,
            seed: Some(4),
            ..StyleArgs::default()
        };
        apply_overrides(&mut config, &style);

        assert_eq!(config.animation.speed, 12.0);
        assert_eq!(config.animation.seed, Some(4));
        assert!(!config.animation.preamble);
        assert_eq!(config.appearance.theme, "nord");
        assert_eq!(config.appearance.language, "javascript");
        assert!(!config.appearance.show_line_numbers);
        assert_eq!(config.appearance.title, "Terminal");
    }

    #[test]
    fn language_flag_selects_the_sample() {
        let mut config = Config::default();
        let style = StyleArgs {
            language: Some("go".to_string()),
            ..StyleArgs::default()
        };
        apply_overrides(&mut config, &style);
        let loaded = load_source(&SourceArgs::default(), &config).unwrap();
        assert_eq!(loaded.language, Some("go"));
        assert!(loaded.text.text().contains("package main"));
    }

    #[test]
    fn sample_source_uses_configured_language() {
        let mut config = Config::default();
        config.appearance.language = "ruby".to_string();
        let loaded = load_source(&SourceArgs::default(), &config).unwrap();
        assert_eq!(loaded.language, Some("ruby"));
        assert!(loaded.text.text().contains("def fibonacci"));
    }

    #[test]
    fn unknown_sample_lists_languages() {
        let args = SourceArgs {
            file: None,
            sample: Some("cobol".to_string()),
        };
        let err = load_source(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("rust"));
    }

    #[test]
    fn file_source_detects_language() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("main.go");
        std::fs::write(&path, "package main\n").unwrap();
        let args = SourceArgs {
            file: Some(path.to_string_lossy().into_owned()),
            sample: None,
        };
        let loaded = load_source(&args, &Config::default()).unwrap();
        assert_eq!(loaded.language, Some("go"));
        assert_eq!(loaded.text.text(), "package main");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n   \n").unwrap();
        let args = SourceArgs {
            file: Some(path.to_string_lossy().into_owned()),
            sample: None,
        };
        assert!(load_source(&args, &Config::default()).is_err());
    }
}
