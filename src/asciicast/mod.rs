//! asciicast v3 writer and parser
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v3/
//!
//! Event times are intervals since the previous event, in seconds.

use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// asciicast v3 header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub version: u8,
    pub term: TermInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Header {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            version: 3,
            term: TermInfo {
                cols,
                rows,
                term_type: Some("xterm-256color".to_string()),
            },
            timestamp: None,
            title: None,
        }
    }
}

/// Terminal information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermInfo {
    pub cols: u32,
    pub rows: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
}

/// Event type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Output (data written to terminal)
    Output, // "o"
    /// Marker (annotation)
    Marker, // "m"
}

impl EventType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "o" => Some(EventType::Output),
            "m" => Some(EventType::Marker),
            _ => None,
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            EventType::Output => "o",
            EventType::Marker => "m",
        }
    }
}

/// An event in the asciicast file
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Time offset from previous event (in seconds)
    pub time: f64,
    pub event_type: EventType,
    /// Output text or marker label
    pub data: String,
}

impl Event {
    pub fn output(time: f64, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type: EventType::Output,
            data: data.into(),
        }
    }

    pub fn marker(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            event_type: EventType::Marker,
            data: label.into(),
        }
    }

    pub fn is_output(&self) -> bool {
        self.event_type == EventType::Output
    }

    pub fn is_marker(&self) -> bool {
        self.event_type == EventType::Marker
    }

    /// Parse an event from a JSON line
    pub fn from_json(line: &str) -> Result<Self> {
        let (time, code, data): (f64, String, String) =
            serde_json::from_str(line).context("Failed to parse event JSON")?;
        let event_type =
            EventType::from_code(&code).with_context(|| format!("Unknown event type: {}", code))?;
        Ok(Event {
            time,
            event_type,
            data,
        })
    }

    /// Convert event to JSON string
    pub fn to_json(&self) -> Result<String> {
        // Millisecond precision keeps files small and stable.
        let time = (self.time * 1000.0).round() / 1000.0;
        serde_json::to_string(&(time, self.event_type.to_code(), &self.data))
            .context("Failed to serialize event")
    }
}

/// Complete asciicast file representation
#[derive(Debug, Clone, PartialEq)]
pub struct AsciicastFile {
    pub header: Header,
    pub events: Vec<Event>,
}

impl AsciicastFile {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Parse an asciicast v3 file from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?;
        let header: Header =
            serde_json::from_str(&header_line).context("Failed to parse header")?;
        if header.version != 3 {
            bail!(
                "Only asciicast v3 format is supported (got version {})",
                header.version
            );
        }

        let mut events = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;
            if line.trim().is_empty() {
                continue;
            }
            let event = Event::from_json(&line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 2))?;
            events.push(event);
        }

        Ok(AsciicastFile { header, events })
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_reader(BufReader::new(content.as_bytes()))
    }

    /// Write the asciicast file to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header_json =
            serde_json::to_string(&self.header).context("Failed to serialize header")?;
        writeln!(writer, "{}", header_json)?;
        for event in &self.events {
            writeln!(writer, "{}", event.to_json()?)?;
        }
        Ok(())
    }

    pub fn to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn markers(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_marker()).collect()
    }

    pub fn outputs(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_output()).collect()
    }

    /// Total playback length.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.events.iter().map(|e| e.time.max(0.0)).sum())
    }
}

/// Appends events given absolute timestamps.
#[derive(Debug, Clone)]
pub struct CastBuilder {
    file: AsciicastFile,
    last: Duration,
}

impl CastBuilder {
    pub fn new(header: Header) -> Self {
        Self {
            file: AsciicastFile::new(header),
            last: Duration::ZERO,
        }
    }

    fn interval(&mut self, at: Duration) -> f64 {
        let at = at.max(self.last);
        let delta = at - self.last;
        self.last = at;
        delta.as_secs_f64()
    }

    pub fn output(&mut self, at: Duration, data: impl Into<String>) {
        let time = self.interval(at);
        self.file.events.push(Event::output(time, data));
    }

    pub fn marker(&mut self, at: Duration, label: impl Into<String>) {
        let time = self.interval(at);
        self.file.events.push(Event::marker(time, label));
    }

    pub fn finish(self) -> AsciicastFile {
        self.file
    }
}
