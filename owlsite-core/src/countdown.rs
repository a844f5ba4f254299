//! Countdown to the event start.
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

pub const TICK_INTERVAL_MS: u32 = 1_000;
/// Shown once the target has passed when the pack has no `eventStarted` label.
pub const DEFAULT_STARTED_LABEL: &str = "EVENT STARTED";

const MS_PER_DAY: u64 = 86_400_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised event date: {0:?}")]
pub struct CountdownError(pub String);

/// Whole days, hours-within-day, minutes-within-hour and seconds-within-minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownParts {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn decompose(remaining_ms: u64) -> Self {
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: ((remaining_ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }

    /// Milliseconds represented by the whole units, dropping the sub-second rest.
    #[must_use]
    pub const fn whole_ms(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours as u64 * MS_PER_HOUR
            + self.minutes as u64 * MS_PER_MINUTE
            + self.seconds as u64 * MS_PER_SECOND
    }

    /// Days, hours, minutes and seconds, each padded to at least two digits.
    #[must_use]
    pub fn padded(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(u64::from(self.hours)),
            pad2(u64::from(self.minutes)),
            pad2(u64::from(self.seconds)),
        ]
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, h, m, s] = self.padded();
        write!(f, "{d}:{h}:{m}:{s}")
    }
}

#[must_use]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownDisplay {
    Remaining(CountdownParts),
    Started,
}

impl CountdownDisplay {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Started)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target_ms: i64,
}

impl Countdown {
    #[must_use]
    pub const fn new(target_ms: i64) -> Self {
        Self { target_ms }
    }

    /// Parse the pack's `eventDateISO`.
    ///
    /// RFC 3339 is tried first; a timestamp without offset or a bare date is
    /// read as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError`] when none of the accepted shapes match.
    pub fn from_iso(iso: &str) -> Result<Self, CountdownError> {
        let trimmed = iso.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::new(dt.timestamp_millis()));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(Self::new(Utc.from_utc_datetime(&naive).timestamp_millis()));
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::new(Utc.from_utc_datetime(&naive).timestamp_millis()))
            .ok_or_else(|| CountdownError(iso.to_string()))
    }

    #[must_use]
    pub const fn target_ms(&self) -> i64 {
        self.target_ms
    }

    #[must_use]
    pub fn tick(&self, now_ms: i64) -> CountdownDisplay {
        let remaining = self.target_ms.saturating_sub(now_ms);
        u64::try_from(remaining).map_or(CountdownDisplay::Started, |ms| {
            CountdownDisplay::Remaining(CountdownParts::decompose(ms))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_chains_modulo() {
        let parts = CountdownParts::decompose(2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5_999);
        assert_eq!(
            parts,
            CountdownParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(parts.to_string(), "02:03:04:05");
    }

    #[test]
    fn padding_only_applies_under_ten() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(9), "09");
        assert_eq!(pad2(10), "10");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn zero_remaining_is_not_started() {
        let countdown = Countdown::new(5_000);
        assert_eq!(
            countdown.tick(5_000),
            CountdownDisplay::Remaining(CountdownParts::default())
        );
        assert_eq!(countdown.tick(5_001), CountdownDisplay::Started);
    }

    #[test]
    fn parses_accepted_date_shapes() {
        let utc = Countdown::from_iso("2025-01-01T00:00:00Z").expect("rfc3339");
        assert_eq!(
            Countdown::from_iso("2025-01-01T04:00:00+04:00").expect("offset"),
            utc
        );
        assert_eq!(Countdown::from_iso("2025-01-01T00:00:00").expect("naive"), utc);
        assert_eq!(Countdown::from_iso("2025-01-01").expect("date"), utc);
        assert!(Countdown::from_iso("next friday").is_err());
    }
}
