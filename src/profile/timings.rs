//! Availability window conversions between wire and typed form.
//!
//! The booking API carries a doctor's daily window as a two-element list of
//! `"HH:mm"` strings; inside the app it is a typed pair of `NaiveTime`s.
//! The two conversions below are the only places the formats meet.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Wall-clock format used by the booking API ("09:00", "17:30").
pub const WIRE_TIME_FORMAT: &str = "%H:%M";

/// A doctor's daily availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "time_hm")]
    pub start: NaiveTime,
    #[serde(with = "time_hm")]
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Parse the wire list into a typed window.
///
/// Anything other than two well-formed `"HH:mm"` entries counts as no
/// window set; unexpected shapes are logged, not surfaced.
pub fn from_wire(timings: &[String]) -> Option<TimeRange> {
    match timings {
        [] => None,
        [start, end] => {
            let parsed_start = NaiveTime::parse_from_str(start, WIRE_TIME_FORMAT);
            let parsed_end = NaiveTime::parse_from_str(end, WIRE_TIME_FORMAT);
            match (parsed_start, parsed_end) {
                (Ok(s), Ok(e)) => Some(TimeRange::new(s, e)),
                _ => {
                    tracing::warn!(
                        start = %start,
                        end = %end,
                        "Stored timings are not HH:mm, treating as unset"
                    );
                    None
                }
            }
        }
        other => {
            tracing::warn!(
                len = other.len(),
                "Stored timings list is not a pair, treating as unset"
            );
            None
        }
    }
}

/// Render the typed window back to the wire list (`[]` when unset).
pub fn to_wire(range: Option<&TimeRange>) -> Vec<String> {
    match range {
        Some(r) => vec![
            r.start.format(WIRE_TIME_FORMAT).to_string(),
            r.end.format(WIRE_TIME_FORMAT).to_string(),
        ],
        None => Vec::new(),
    }
}

/// Serde adapter for `"HH:mm"` wall-clock strings.
pub mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::WIRE_TIME_FORMAT;

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(WIRE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, WIRE_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
