//! Integration tests for date/time formatting.
//!
//! Time values are epoch milliseconds; every formatter here pins the
//! time zone to UTC so the expectations do not depend on the host zone.

mod common;

use intl_format::{
    ComponentWidth, DateTimeFormat, DateTimeFormatOptions, IntlError,
};

/// 1970-01-01T15:45:30Z, a Thursday.
const AFTERNOON: f64 = 56_730_000.0;

// =========================================================================
// Template selection and date rendering
// =========================================================================

#[test]
fn two_digit_date_at_the_epoch() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .year(ComponentWidth::Numeric)
        .month(ComponentWidth::TwoDigit)
        .day(ComponentWidth::TwoDigit)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "01/01/1970");
}

#[test]
fn empty_options_default_to_a_numeric_date() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder().time_zone("UTC").build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "1/1/1970");
}

#[test]
fn long_weekday_and_month_names() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .weekday(ComponentWidth::Long)
        .year(ComponentWidth::Numeric)
        .month(ComponentWidth::Long)
        .day(ComponentWidth::Numeric)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "Thursday, January 1, 1970");
}

#[test]
fn german_date_uses_the_two_digit_template() {
    let registry = common::registry();
    // The request is numeric, but the chosen template renders 2-digit day
    // and month; the template's widths win.
    let options = DateTimeFormatOptions::builder().time_zone("UTC").build();
    let format = DateTimeFormat::new(&registry, &["de-DE"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "01.01.1970");
    let resolved = format.resolved_options();
    assert_eq!(resolved.day, Some(ComponentWidth::TwoDigit));
    assert_eq!(resolved.month, Some(ComponentWidth::TwoDigit));
}

#[test]
fn full_date_time_template() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .year(ComponentWidth::Numeric)
        .month(ComponentWidth::Numeric)
        .day(ComponentWidth::Numeric)
        .hour(ComponentWidth::Numeric)
        .minute(ComponentWidth::TwoDigit)
        .second(ComponentWidth::TwoDigit)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(AFTERNOON).unwrap(), "1/1/1970, 3:45:30 PM");
}

// =========================================================================
// Hour cycles
// =========================================================================

#[test]
fn twelve_hour_clock_renders_midnight_as_twelve() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .hour(ComponentWidth::Numeric)
        .minute(ComponentWidth::TwoDigit)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "12:00 AM");
    assert_eq!(format.format(AFTERNOON).unwrap(), "3:45 PM");
    assert_eq!(format.resolved_options().hour12, Some(true));
}

#[test]
fn explicit_twenty_four_hour_override() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .hour(ComponentWidth::Numeric)
        .minute(ComponentWidth::TwoDigit)
        .hour12(false)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.format(AFTERNOON).unwrap(), "15:45");
    assert_eq!(format.resolved_options().hour12, Some(false));
}

#[test]
fn german_locale_defaults_to_a_two_digit_twenty_four_hour_clock() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .hour(ComponentWidth::TwoDigit)
        .minute(ComponentWidth::TwoDigit)
        .time_zone("UTC")
        .build();
    let format = DateTimeFormat::new(&registry, &["de-DE"], options).unwrap();
    assert_eq!(format.format(0.0).unwrap(), "00:00");
    assert_eq!(format.format(AFTERNOON).unwrap(), "15:45");
}

// =========================================================================
// Calendars and extensions
// =========================================================================

#[test]
fn calendar_extension_inherits_gregorian_names() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .weekday(ComponentWidth::Long)
        .year(ComponentWidth::Numeric)
        .month(ComponentWidth::Long)
        .day(ComponentWidth::Numeric)
        .time_zone("UTC")
        .build();
    let format =
        DateTimeFormat::new(&registry, &["en-US-u-ca-buddhist"], options).unwrap();
    let resolved = format.resolved_options();
    assert_eq!(resolved.locale, "en-US-u-ca-buddhist");
    assert_eq!(resolved.calendar, "buddhist");
    assert_eq!(format.format(0.0).unwrap(), "Thursday, January 1, 1970");
}

#[test]
fn unsupported_calendar_extension_falls_back() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder().time_zone("UTC").build();
    let format =
        DateTimeFormat::new(&registry, &["en-US-u-ca-chinese"], options).unwrap();
    let resolved = format.resolved_options();
    assert_eq!(resolved.locale, "en-US");
    assert_eq!(resolved.calendar, "gregory");
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn time_zone_is_case_insensitive() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder().time_zone("utc").build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert_eq!(format.resolved_options().time_zone.as_deref(), Some("UTC"));
}

#[test]
fn named_time_zones_are_rejected() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder()
        .time_zone("America/New_York")
        .build();
    assert!(matches!(
        DateTimeFormat::new(&registry, &["en-US"], options),
        Err(IntlError::UnsupportedTimeZone { .. })
    ));
}

#[test]
fn non_finite_time_values_are_rejected() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder().time_zone("UTC").build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert!(matches!(
        format.format(f64::NAN),
        Err(IntlError::InvalidTimeValue { .. })
    ));
    assert!(matches!(
        format.format(f64::INFINITY),
        Err(IntlError::InvalidTimeValue { .. })
    ));
}

#[test]
fn format_now_produces_output() {
    let registry = common::registry();
    let options = DateTimeFormatOptions::builder().time_zone("UTC").build();
    let format = DateTimeFormat::new(&registry, &["en-US"], options).unwrap();
    assert!(!format.format_now().unwrap().is_empty());
}

// =========================================================================
// Resolution and resolved options
// =========================================================================

#[test]
fn supported_locales_require_date_time_data() {
    let registry = common::registry();
    let supported = DateTimeFormat::supported_locales_of(
        &registry,
        &["th", "de-DE"],
        DateTimeFormatOptions::default(),
    )
    .unwrap();
    assert_eq!(supported, vec!["de-DE".to_string()]);
}

#[test]
fn resolved_options_are_structurally_equal() {
    let registry = common::registry();
    let options = || {
        DateTimeFormatOptions::builder()
            .weekday(ComponentWidth::Long)
            .month(ComponentWidth::Long)
            .day(ComponentWidth::Numeric)
            .year(ComponentWidth::Numeric)
            .time_zone("UTC")
            .build()
    };
    let first = DateTimeFormat::new(&registry, &["en-US"], options()).unwrap();
    let second = DateTimeFormat::new(&registry, &["en-US"], options()).unwrap();
    assert_eq!(first.resolved_options(), second.resolved_options());
}
