//! The code and its animation settings as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ExportSettings;
use crate::animator::SourceText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub code: String,
    pub settings: DocumentSettings,
    /// RFC 3339 UTC time of the export
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    pub speed: f64,
    pub language: String,
    pub theme: String,
    pub title: String,
}

impl ExportDocument {
    pub fn new(source: &SourceText, settings: &ExportSettings, now: DateTime<Local>) -> Self {
        Self {
            code: source.text(),
            settings: DocumentSettings {
                speed: settings.animator.speed_ms,
                language: settings.language.clone(),
                theme: settings.theme.name.to_string(),
                title: settings.title.clone(),
            },
            timestamp: now
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub fn render(source: &SourceText, settings: &ExportSettings, now: DateTime<Local>) -> Result<String> {
    let document = ExportDocument::new(source, settings, now);
    serde_json::to_string_pretty(&document).context("Failed to serialize export document")
}
