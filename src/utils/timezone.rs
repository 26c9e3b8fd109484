//! Forex Factory time correction.
//!
//! Calendar times scraped from Forex Factory come in whatever zone the
//! browser session happened to be in. Everything on the dashboard is quoted in
//! GMT+1, so these helpers normalise a "HH:MM [zone]" string into that zone.

use std::fmt;

use crate::config::CLOCK;

/// Fixed offsets (hours from UTC) the converter understands.
const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("GMT+0", 0),
    ("GMT+1", 1),
    ("GMT+2", 2),
    ("GMT+7", 7),
    ("GMT+8", 8),
    ("GMT+9", 9),
    ("GMT-4", -4),
    ("GMT-5", -5),
    ("GMT-7", -7),
    ("GMT-8", -8),
    ("UTC", 0),
    ("CET", 1),
    ("CEST", 2),
];

/// City names mapped onto a zone in `ZONE_OFFSETS`. Cities use their
/// standard-time offset.
const ZONE_ALIASES: &[(&str, &str)] = &[
    ("BANGKOK", "GMT+7"),
    ("SINGAPORE", "GMT+8"),
    ("TOKYO", "GMT+9"),
    ("NYC", "GMT-5"),
    ("NEW YORK", "GMT-5"),
    ("LA", "GMT-8"),
    ("LOS ANGELES", "GMT-8"),
    ("LONDON", "GMT+0"),
    ("FRANKFURT", "GMT+1"),
    ("BERLIN", "GMT+1"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input is not "H:MM" or "HH:MM" optionally followed by a zone
    InvalidFormat(String),
    /// Hours or minutes outside 0-23 / 0-59
    OutOfRange { hours: u32, minutes: u32 },
    /// Zone is neither a known offset nor a known city
    UnknownZone(String),
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeParseError::InvalidFormat(input) => write!(f, "Invalid time format: {}", input),
            TimeParseError::OutOfRange { hours, minutes } => {
                write!(f, "Invalid time: {}:{}", hours, minutes)
            }
            TimeParseError::UnknownZone(zone) => write!(f, "Unknown timezone: {}", zone),
        }
    }
}

impl std::error::Error for TimeParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedTime {
    pub hours: u32,
    pub minutes: u32,
    pub offset_hours: i32,
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

pub fn zone_offset(zone: &str) -> Option<i32> {
    let canonical = ZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == zone)
        .map(|(_, target)| *target)
        .unwrap_or(zone);

    ZONE_OFFSETS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, offset)| *offset)
}

/// Parse "18:00 GMT+7", "18:00 Bangkok" or a bare "06:00".
/// Matching is case-insensitive and a bare time is taken as GMT+1.
pub fn parse_time_input(input: &str) -> Result<ZonedTime, TimeParseError> {
    let normalised = input.trim().to_uppercase();
    let invalid = || TimeParseError::InvalidFormat(normalised.clone());

    let (hour_part, rest) = normalised.split_once(':').ok_or_else(invalid)?;
    if hour_part.is_empty() || hour_part.len() > 2 || !hour_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let minute_part = rest.get(..2).ok_or_else(invalid)?;
    if !minute_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let zone_part = rest[2..].trim();

    let hours: u32 = hour_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minute_part.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(TimeParseError::OutOfRange { hours, minutes });
    }

    let zone = if zone_part.is_empty() {
        CLOCK.converter_default_zone
    } else {
        zone_part
    };
    let offset_hours =
        zone_offset(zone).ok_or_else(|| TimeParseError::UnknownZone(zone.to_string()))?;

    Ok(ZonedTime {
        hours,
        minutes,
        offset_hours,
    })
}

/// Shift a parsed time into the target zone, wrapping across midnight.
pub fn convert_to_target(time: ZonedTime) -> ZonedTime {
    let target = CLOCK.converter_target_offset_hours;
    let shifted = (time.hours as i32 + target - time.offset_hours).rem_euclid(24);
    ZonedTime {
        hours: shifted as u32,
        minutes: time.minutes,
        offset_hours: target,
    }
}

/// Parse and convert in one step, returning "HH:MM" in GMT+1.
pub fn convert_time(input: &str) -> Result<String, TimeParseError> {
    parse_time_input(input).map(|time| convert_to_target(time).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_asian_sessions_back_to_frankfurt() {
        assert_eq!(convert_time("18:00 GMT+7").unwrap(), "12:00");
        assert_eq!(convert_time("18:00 Bangkok").unwrap(), "12:00");
        assert_eq!(convert_time("09:30 tokyo").unwrap(), "01:30");
    }

    #[test]
    fn wraps_across_midnight() {
        assert_eq!(convert_time("03:00 GMT+9").unwrap(), "19:00");
        assert_eq!(convert_time("20:15 NYC").unwrap(), "02:15");
        assert_eq!(convert_time("23:00 New York").unwrap(), "05:00");
    }

    #[test]
    fn bare_time_is_already_frankfurt() {
        assert_eq!(convert_time("06:00").unwrap(), "06:00");
        assert_eq!(convert_time("7:05").unwrap(), "07:05");
        assert_eq!(convert_time("12:00 CEST").unwrap(), "11:00");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            convert_time("noon"),
            Err(TimeParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            convert_time("123:00"),
            Err(TimeParseError::InvalidFormat(_))
        ));
        assert_eq!(
            convert_time("24:00"),
            Err(TimeParseError::OutOfRange {
                hours: 24,
                minutes: 0
            })
        );
        assert_eq!(
            convert_time("10:00 Sydney"),
            Err(TimeParseError::UnknownZone("SYDNEY".to_string()))
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let err = convert_time("10:00 Mars").unwrap_err();
        assert_eq!(err.to_string(), "Unknown timezone: MARS");
    }
}
