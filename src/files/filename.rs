//! Filename generation and sanitization for exports.
//!
//! Export names look like `terminal-recording-<slug>-<timestamp>.cast`, where
//! the slug comes from the window title.

use chrono::{DateTime, Local};
use deunicode::deunicode;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback when sanitization produces an empty result.
const FALLBACK_NAME: &str = "terminal";

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Longest slug taken from a title.
pub const MAX_SLUG_LENGTH: usize = 50;

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Sanitizes a string for use in filenames.
///
/// Applies the following transformations in order:
/// 1. Unicode → ASCII transliteration
/// 2. Whitespace → hyphens, invalid characters dropped, hyphens collapsed
/// 3. Leading/trailing dots, spaces, hyphens trimmed
/// 4. Windows reserved names prefixed with `_`
/// 5. Empty results → "terminal" fallback
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Anything else that survived deunicode is dropped
    }

    let final_name = handle_reserved_name(trim_edges(&result));
    if final_name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        final_name
    }
}

/// Lower-case slug of a title, truncated to [`MAX_SLUG_LENGTH`].
pub fn slug(title: &str) -> String {
    let sanitized = sanitize(&title.to_lowercase()).replace('.', "-");
    let truncated: String = sanitized.chars().take(MAX_SLUG_LENGTH).collect();
    let trimmed = trim_edges(&truncated);
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build an export filename: `terminal-<kind>-<slug>-<timestamp>.<ext>`.
pub fn export_filename(
    kind: &str,
    title: &str,
    at: DateTime<Local>,
    extension: &str,
) -> Result<String, FilenameError> {
    let filename = format!(
        "terminal-{}-{}-{}.{}",
        kind,
        slug(title),
        at.format(TIMESTAMP_FORMAT),
        extension
    );
    validate_length(&filename)?;
    Ok(filename)
}

/// Validates that a final filename doesn't exceed filesystem limits.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Trims leading and trailing dots, spaces, and hyphens.
fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c| c == '.' || c == ' ' || c == '-')
}

/// Checks if a name is a Windows reserved name and prefixes it if so.
///
/// Handles both exact matches (CON) and names with extensions (CON.txt).
fn handle_reserved_name(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.iter().any(|reserved| upper == *reserved) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Errors that can occur during filename operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sanitize_transliterates_and_hyphenates() {
        assert_eq!(sanitize("Café Terminal"), "Cafe-Terminal");
        assert_eq!(sanitize("a  /  b"), "a-b");
        assert_eq!(sanitize("--hidden.."), "hidden");
    }

    #[test]
    fn sanitize_handles_reserved_and_empty_names() {
        assert_eq!(sanitize("con"), "_con");
        assert_eq!(sanitize("NUL.txt"), "_NUL.txt");
        assert_eq!(sanitize("???"), "terminal");
    }

    #[test]
    fn slug_is_lowercase_and_bounded() {
        assert_eq!(slug("My Demo v1.2"), "my-demo-v1-2");
        assert_eq!(slug(&"x".repeat(80)).len(), MAX_SLUG_LENGTH);
        assert_eq!(slug(""), "terminal");
    }

    #[test]
    fn export_filename_has_kind_slug_and_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let name = export_filename("recording", "Rust Demo", at, "cast").unwrap();
        assert_eq!(name, "terminal-recording-rust-demo-20260304-050607.cast");
    }

    #[test]
    fn validate_length_rejects_long_names() {
        assert!(validate_length(&"a".repeat(255)).is_ok());
        assert_eq!(
            validate_length(&"a".repeat(256)),
            Err(FilenameError::TooLong {
                length: 256,
                max: 255
            })
        );
    }
}
