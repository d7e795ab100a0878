//! Time parsing and formatting utilities

use crate::error::{VidcutError, VidcutResult};

/// Parse a time expression to seconds.
///
/// Recognized shapes, checked in this order:
///
/// 1. `500ms` — milliseconds
/// 2. `90s` — seconds with an explicit suffix
/// 3. `01:30`, `1:02:03.456` — colon-separated fields, missing leading
///    fields default to zero
/// 4. `45.5` — plain seconds
pub fn parse_time(text: &str) -> VidcutResult<f64> {
    let normalized = text.trim().to_lowercase();

    if let Some(prefix) = normalized.strip_suffix("ms") {
        let millis: f64 = prefix
            .trim()
            .parse()
            .map_err(|_| VidcutError::InvalidTimeFormat {
                text: text.to_string(),
            })?;
        return Ok((millis / 1000.0).max(0.0));
    }

    let normalized = normalized.strip_suffix('s').unwrap_or(&normalized);

    if normalized.contains(':') {
        let mut fields = Vec::new();
        for part in normalized.split(':') {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| VidcutError::InvalidTimeFormat {
                    text: text.to_string(),
                })?;
            fields.push(value);
        }
        if fields.len() > 3 {
            return Err(VidcutError::InvalidTimeFormat {
                text: text.to_string(),
            });
        }
        while fields.len() < 3 {
            fields.insert(0, 0.0);
        }
        return Ok((fields[0] * 3600.0 + fields[1] * 60.0 + fields[2]).max(0.0));
    }

    normalized
        .parse::<f64>()
        .map(|seconds| seconds.max(0.0))
        .map_err(|_| VidcutError::InvalidTimeFormat {
            text: text.to_string(),
        })
}

/// Format seconds as a zero-padded `HH:MM:SS.mmm` timestamp.
///
/// Total function: negative input is clamped to 0. Rounds to the nearest
/// millisecond, carrying into the seconds field so the millisecond component
/// stays three digits wide.
pub fn format_time(seconds: f64) -> String {
    let clamped = seconds.max(0.0);
    let total_millis = (clamped * 1000.0).round() as u64;

    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}
