use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Date-and-time layouts accepted on the command line
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%d/%m/%Y %H:%M",
    "%d %B %Y %H:%M",
];

/// Date-only layouts; these resolve to midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d %B %Y"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid time '{0}': use YYYY-MM-DD [HH:MM], DD/MM/YYYY [HH:MM] or e.g. '13 April 2017 [14:00]'"
)]
pub struct TimeParseError(pub String);

/// Parse a timestamp in one of the fixed formats above. Month names may be
/// full or abbreviated and are case-insensitive.
pub fn parse_time(s: &str) -> Result<NaiveDateTime, TimeParseError> {
    let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(TimeParseError(s.to_string()));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok(t);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&normalized, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }
    Err(TimeParseError(s.to_string()))
}
