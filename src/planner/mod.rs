//! Cut range resolution
//!
//! Reconciles the user's possibly redundant time expressions into one
//! canonical (start, duration) pair. The source's total duration is only
//! consulted when an absolute end or tail trim was requested; the probe is
//! handed in as a deferred call so the cheap path never pays for an FFmpeg
//! invocation.

use std::path::Path;

use tracing::debug;

use crate::error::{VidcutError, VidcutResult};
use crate::utils::time::format_time;

/// The five optional user-supplied time fields, already parsed to seconds.
#[derive(Debug, Clone, Default)]
pub struct RawTimeInputs {
    /// Absolute start time
    pub start: Option<f64>,
    /// Absolute end time
    pub end: Option<f64>,
    /// Duration to keep, relative to the start
    pub duration: Option<f64>,
    /// Seconds to drop from the head
    pub trim_start: Option<f64>,
    /// Seconds to drop from the tail
    pub trim_end: Option<f64>,
}

impl RawTimeInputs {
    /// True when resolution needs the source's total duration.
    fn needs_probe(&self) -> bool {
        self.end.is_some() || self.trim_end.is_some()
    }
}

/// Canonical resolved cut range. `duration` of `None` means the cut runs to
/// the end of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub start: f64,
    pub duration: Option<f64>,
}

/// Resolve the raw time inputs into a canonical range for `input`.
///
/// `probe` is invoked at most once, and only when an absolute end or tail
/// trim requires the source's total duration. Precedence for the cut end:
/// `trim_end` over `end` over `duration`.
pub fn resolve_range(
    raw: &RawTimeInputs,
    input: &Path,
    probe: impl FnOnce() -> Option<f64>,
) -> VidcutResult<ResolvedRange> {
    let mut start = raw.start.unwrap_or(0.0);
    if let Some(trim) = raw.trim_start {
        // Head trim composes additively with an explicit start.
        start = (start + trim).max(0.0);
    }

    if !raw.needs_probe() {
        let duration = raw.duration.map(|d| d.max(0.0));
        debug!(
            "Resolved range without probing: start={start:.3}s, duration={duration:?}"
        );
        return Ok(ResolvedRange { start, duration });
    }

    let total = probe();

    let (duration, end) = if let Some(trim_end) = raw.trim_end {
        let total = total.ok_or_else(|| VidcutError::ProbeUnavailable {
            path: input.display().to_string(),
        })?;
        let keep_to = (total - trim_end).max(0.0);
        (keep_to - start, keep_to)
    } else if let Some(end) = raw.end {
        // The probed value is not consumed here, so a failed probe is not
        // an error.
        (end - start, end)
    } else {
        unreachable!("needs_probe implies end or trim_end")
    };

    if duration < 0.0 {
        return Err(VidcutError::InvalidRange {
            start: format_time(start),
            end: format_time(end.max(0.0)),
        });
    }

    debug!("Resolved range: start={start:.3}s, duration={duration:.3}s");
    Ok(ResolvedRange {
        start,
        duration: Some(duration),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_probe() -> Option<f64> {
        panic!("probe must not be invoked for this input combination");
    }

    #[test]
    fn duration_only_never_probes() {
        let raw = RawTimeInputs {
            start: Some(3.0),
            duration: Some(10.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), no_probe).unwrap();
        assert_eq!(range.start, 3.0);
        assert_eq!(range.duration, Some(10.0));
    }

    #[test]
    fn no_inputs_resolve_to_whole_file() {
        let raw = RawTimeInputs::default();
        let range = resolve_range(&raw, Path::new("in.mp4"), no_probe).unwrap();
        assert_eq!(range.start, 0.0);
        assert_eq!(range.duration, None);
    }

    #[test]
    fn trim_start_composes_with_start() {
        let raw = RawTimeInputs {
            start: Some(10.0),
            trim_start: Some(2.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), no_probe).unwrap();
        assert_eq!(range.start, 12.0);
        assert_eq!(range.duration, None);
    }

    #[test]
    fn tail_trim_keeps_the_rest() {
        let raw = RawTimeInputs {
            trim_end: Some(5.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), || Some(60.0)).unwrap();
        assert_eq!(range.start, 0.0);
        assert_eq!(range.duration, Some(55.0));
    }

    #[test]
    fn tail_trim_requires_probed_duration() {
        let raw = RawTimeInputs {
            trim_end: Some(5.0),
            ..Default::default()
        };
        let err = resolve_range(&raw, Path::new("in.mp4"), || None).unwrap_err();
        assert!(matches!(err, VidcutError::ProbeUnavailable { .. }));
    }

    #[test]
    fn absolute_end_defines_duration() {
        let raw = RawTimeInputs {
            start: Some(5.0),
            end: Some(12.5),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), || Some(60.0)).unwrap();
        assert_eq!(range.start, 5.0);
        assert_eq!(range.duration, Some(7.5));
    }

    #[test]
    fn end_survives_a_failed_probe() {
        let raw = RawTimeInputs {
            end: Some(10.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), || None).unwrap();
        assert_eq!(range.duration, Some(10.0));
    }

    #[test]
    fn end_before_start_is_invalid() {
        let raw = RawTimeInputs {
            start: Some(50.0),
            end: Some(40.0),
            ..Default::default()
        };
        let err = resolve_range(&raw, Path::new("in.mp4"), || Some(120.0)).unwrap_err();
        assert!(matches!(err, VidcutError::InvalidRange { .. }));
    }

    #[test]
    fn tail_trim_past_start_is_invalid() {
        let raw = RawTimeInputs {
            start: Some(50.0),
            trim_end: Some(20.0),
            ..Default::default()
        };
        // keep_to = 60 - 20 = 40 < start
        let err = resolve_range(&raw, Path::new("in.mp4"), || Some(60.0)).unwrap_err();
        assert!(matches!(err, VidcutError::InvalidRange { .. }));
    }

    #[test]
    fn trim_end_wins_over_end_and_duration() {
        let raw = RawTimeInputs {
            end: Some(30.0),
            duration: Some(7.0),
            trim_end: Some(10.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), || Some(60.0)).unwrap();
        assert_eq!(range.duration, Some(50.0));
    }

    #[test]
    fn end_wins_over_duration() {
        let raw = RawTimeInputs {
            end: Some(30.0),
            duration: Some(7.0),
            ..Default::default()
        };
        let range = resolve_range(&raw, Path::new("in.mp4"), || Some(60.0)).unwrap();
        assert_eq!(range.duration, Some(30.0));
    }
}
