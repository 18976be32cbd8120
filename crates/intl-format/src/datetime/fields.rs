//! Epoch-millisecond to calendar-field decomposition.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

/// Gregorian calendar fields for one instant in one time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CalendarFields {
    /// Days since Sunday, 0 to 6.
    pub weekday: u32,
    /// Astronomical year; 0 and below are BCE.
    pub year: i32,
    /// Zero-based month, matching name-table indexing.
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Decomposes an epoch-millisecond time value in UTC or the system's
/// local zone. Returns `None` when the value is outside chrono's
/// representable range.
pub(crate) fn decompose(time_value: f64, utc: bool) -> Option<CalendarFields> {
    let millis = time_value.trunc() as i64;
    if utc {
        Utc.timestamp_millis_opt(millis).single().map(fields_of)
    } else {
        Local.timestamp_millis_opt(millis).single().map(fields_of)
    }
}

fn fields_of<Tz: TimeZone>(instant: DateTime<Tz>) -> CalendarFields {
    CalendarFields {
        weekday: instant.weekday().num_days_from_sunday(),
        year: instant.year(),
        month0: instant.month0(),
        day: instant.day(),
        hour: instant.hour(),
        minute: instant.minute(),
        second: instant.second(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_zero_is_the_unix_epoch() {
        let fields = decompose(0.0, true).unwrap();
        assert_eq!(fields.year, 1970);
        assert_eq!(fields.month0, 0);
        assert_eq!(fields.day, 1);
        assert_eq!(fields.weekday, 4); // Thursday
        assert_eq!((fields.hour, fields.minute, fields.second), (0, 0, 0));
    }

    #[test]
    fn fractional_milliseconds_truncate() {
        let fields = decompose(999.9, true).unwrap();
        assert_eq!(fields.second, 0);
        let fields = decompose(1000.1, true).unwrap();
        assert_eq!(fields.second, 1);
    }

    #[test]
    fn negative_values_reach_before_the_epoch() {
        let fields = decompose(-86_400_000.0, true).unwrap();
        assert_eq!((fields.year, fields.month0, fields.day), (1969, 11, 31));
    }
}
