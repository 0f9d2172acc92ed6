//! Derivation of the display-only processing time of a backend order.

use crate::model::RemoteOrder;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use thiserror::Error;

/// Why a processing time could not be derived for one order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimestampError {
    #[error("invalid {field} {value:?}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("can't subtract offset-naive and offset-aware datetimes")]
    MixedOffsets,
}

/// A timestamp as sent by the order service.
///
/// The order service serializes local date-times without an offset, while
/// other producers append `Z`. Both forms are accepted but never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_stamp(field: &'static str, raw: &str) -> Result<Stamp, TimestampError> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Stamp::Aware(dt));
    }
    let mut last_err = None;
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(dt) => return Ok(Stamp::Naive(dt)),
            Err(e) => last_err = Some(e),
        }
    }
    Err(TimestampError::Invalid {
        field,
        value: raw.to_string(),
        reason: last_err.map(|e| e.to_string()).unwrap_or_default(),
    })
}

fn delta_seconds(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Seconds between `placedTime` and `confirmedTime`.
///
/// Returns `Ok(None)` when either timestamp is missing, and an error when a
/// present timestamp does not parse.
pub fn processing_time(order: &RemoteOrder) -> Result<Option<f64>, TimestampError> {
    let (Some(placed), Some(confirmed)) =
        (present(&order.placed_time), present(&order.confirmed_time))
    else {
        return Ok(None);
    };

    let placed = parse_stamp("placedTime", placed)?;
    let confirmed = parse_stamp("confirmedTime", confirmed)?;
    let delta = match (placed, confirmed) {
        (Stamp::Aware(p), Stamp::Aware(c)) => c.signed_duration_since(p),
        (Stamp::Naive(p), Stamp::Naive(c)) => c.signed_duration_since(p),
        _ => return Err(TimestampError::MixedOffsets),
    };
    Ok(Some(delta_seconds(delta)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(placed: Option<&str>, confirmed: Option<&str>) -> RemoteOrder {
        RemoteOrder {
            id: Some("o-1".to_string()),
            placed_time: placed.map(str::to_string),
            confirmed_time: confirmed.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_second_with_utc_designator() {
        let o = order(Some("2024-01-01T00:00:00Z"), Some("2024-01-01T00:00:01Z"));
        assert_eq!(processing_time(&o), Ok(Some(1.0)));
    }

    #[test]
    fn test_offset_less_timestamps_with_fraction() {
        let o = order(
            Some("2024-01-01T00:00:00"),
            Some("2024-01-01T00:00:01.5"),
        );
        assert_eq!(processing_time(&o), Ok(Some(1.5)));
    }

    #[test]
    fn test_sub_second_precision() {
        let o = order(
            Some("2024-05-02T10:15:30.100000"),
            Some("2024-05-02T10:15:30.350000"),
        );
        let secs = processing_time(&o).unwrap().unwrap();
        assert!((secs - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_missing_confirmed_time_is_absent() {
        assert_eq!(processing_time(&order(Some("2024-01-01T00:00:00Z"), None)), Ok(None));
        assert_eq!(processing_time(&order(None, None)), Ok(None));
        assert_eq!(processing_time(&order(Some("2024-01-01T00:00:00Z"), Some(""))), Ok(None));
    }

    #[test]
    fn test_malformed_timestamp_is_error() {
        let o = order(Some("yesterday"), Some("2024-01-01T00:00:01Z"));
        match processing_time(&o) {
            Err(TimestampError::Invalid { field, value, .. }) => {
                assert_eq!(field, "placedTime");
                assert_eq!(value, "yesterday");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_offsets_is_error() {
        let o = order(Some("2024-01-01T00:00:00"), Some("2024-01-01T00:00:01Z"));
        assert_eq!(processing_time(&o), Err(TimestampError::MixedOffsets));
    }
}
