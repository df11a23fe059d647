//! Destination record timestamp format.
//!
//! Lambda writes destination timestamps as `yyyy-MM-dd'T'HH:mm:ss.SSSX` in
//! UTC, e.g. `2022-01-01T00:00:00.123Z`. Consumers may compare these strings
//! literally, so output is always fixed width: three fractional digits and a
//! `Z` suffix. Sub-millisecond precision is truncated.
//!
//! On input the zone designator may be `Z`, `+HH` or `+HHMM` (either sign);
//! the instant is normalized to UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::TimestampError;

/// `strftime` pattern for everything before the zone designator.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f";

/// Format an instant the way destination records carry it.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
///     + chrono::Duration::milliseconds(123);
/// assert_eq!(lambda_events::timestamp::format(&instant), "2022-01-01T00:00:00.123Z");
/// ```
pub fn format(instant: &DateTime<Utc>) -> String {
    format!("{}Z", instant.format(DATE_TIME_FORMAT))
}

/// Parse a destination timestamp into a UTC instant.
pub fn parse(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    let (naive, zone) = NaiveDateTime::parse_and_remainder(value, DATE_TIME_FORMAT).map_err(
        |err| TimestampError::Malformed {
            value: value.to_string(),
            reason: err.to_string(),
        },
    )?;

    let zone_error = || TimestampError::Zone {
        value: value.to_string(),
        zone: zone.to_string(),
    };

    let offset_seconds = parse_zone(zone).ok_or_else(zone_error)?;
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(zone_error)?;
    let local = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(zone_error)?;

    Ok(local.with_timezone(&Utc))
}

/// Offset in seconds east of UTC for an ISO-8601 `X` designator.
fn parse_zone(zone: &str) -> Option<i32> {
    if zone == "Z" {
        return Some(0);
    }

    let sign = match zone.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = &zone[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 18 || minutes > 59 {
        return None;
    }

    Some(sign * (hours * 3600 + minutes * 60))
}

/// Serde adapter for `Option<DateTime<Utc>>` fields in the destination format.
///
/// Use with `#[serde(default, with = "crate::timestamp::option")]`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&super::format(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
