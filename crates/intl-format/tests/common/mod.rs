//! Shared locale data fixtures for the integration tests.

use std::collections::HashMap;

use intl_format::{
    CalendarData, ComponentWidth, DateTimeData, DayPeriods, FormatTemplate, LocaleRegistry, NameTable,
    NumberData, NumberPatterns, NumberSymbols, StylePatterns,
};

pub fn style(positive: &str, negative: &str) -> StylePatterns {
    StylePatterns { positive: positive.to_string(), negative: negative.to_string() }
}

pub fn latn_symbols(decimal: &str, group: &str) -> NumberSymbols {
    NumberSymbols {
        decimal: decimal.to_string(),
        group: group.to_string(),
        nan: "NaN".to_string(),
        infinity: "∞".to_string(),
        percent_sign: "%".to_string(),
        plus_sign: "+".to_string(),
        minus_sign: "-".to_string(),
    }
}

fn names(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| (*value).to_string()).collect())
}

pub fn en_us_number() -> NumberData {
    NumberData {
        numbering_systems: vec!["latn".to_string()],
        patterns: NumberPatterns {
            decimal: style("{number}", "-{number}"),
            percent: style("{number}%", "-{number}%"),
            currency: style("{currency}{number}", "-{currency}{number}"),
            primary_group_size: None,
            secondary_group_size: None,
        },
        symbols: HashMap::from([("latn".to_string(), latn_symbols(".", ","))]),
        currencies: HashMap::from([
            ("USD".to_string(), "$".to_string()),
            ("JPY".to_string(), "¥".to_string()),
        ]),
    }
}

pub fn en_us_date_time() -> DateTimeData {
    let gregory = CalendarData {
        months: NameTable {
            narrow: None,
            short: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ]),
            long: names(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
        },
        days: NameTable {
            narrow: names(&["S", "M", "T", "W", "T", "F", "S"]),
            short: names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            long: names(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
        },
        eras: NameTable { narrow: None, short: names(&["BC", "AD"]), long: None },
        day_periods: Some(DayPeriods { am: "AM".to_string(), pm: "PM".to_string() }),
    };
    DateTimeData {
        calendars: vec!["gregory".to_string(), "buddhist".to_string()],
        numbering_systems: Vec::new(),
        hour12: true,
        hour_no0: true,
        formats: vec![
            FormatTemplate {
                month: Some(ComponentWidth::TwoDigit),
                day: Some(ComponentWidth::TwoDigit),
                year: Some(ComponentWidth::Numeric),
                pattern: "{month}/{day}/{year}".to_string(),
                ..FormatTemplate::default()
            },
            FormatTemplate {
                month: Some(ComponentWidth::Numeric),
                day: Some(ComponentWidth::Numeric),
                year: Some(ComponentWidth::Numeric),
                pattern: "{month}/{day}/{year}".to_string(),
                ..FormatTemplate::default()
            },
            FormatTemplate {
                weekday: Some(ComponentWidth::Long),
                month: Some(ComponentWidth::Long),
                day: Some(ComponentWidth::Numeric),
                year: Some(ComponentWidth::Numeric),
                pattern: "{weekday}, {month} {day}, {year}".to_string(),
                ..FormatTemplate::default()
            },
            FormatTemplate {
                hour: Some(ComponentWidth::Numeric),
                minute: Some(ComponentWidth::TwoDigit),
                pattern: "{hour}:{minute}".to_string(),
                pattern12: Some("{hour}:{minute} {ampm}".to_string()),
                ..FormatTemplate::default()
            },
            FormatTemplate {
                month: Some(ComponentWidth::Numeric),
                day: Some(ComponentWidth::Numeric),
                year: Some(ComponentWidth::Numeric),
                hour: Some(ComponentWidth::Numeric),
                minute: Some(ComponentWidth::TwoDigit),
                second: Some(ComponentWidth::TwoDigit),
                pattern: "{month}/{day}/{year}, {hour}:{minute}:{second}".to_string(),
                pattern12: Some("{month}/{day}/{year}, {hour}:{minute}:{second} {ampm}".to_string()),
                ..FormatTemplate::default()
            },
        ],
        calendar_data: HashMap::from([("gregory".to_string(), gregory)]),
    }
}

pub fn de_de_number() -> NumberData {
    NumberData {
        numbering_systems: vec!["latn".to_string()],
        patterns: NumberPatterns {
            decimal: style("{number}", "-{number}"),
            percent: style("{number} %", "-{number} %"),
            currency: style("{number} {currency}", "-{number} {currency}"),
            primary_group_size: None,
            secondary_group_size: None,
        },
        symbols: HashMap::from([("latn".to_string(), latn_symbols(",", "."))]),
        currencies: HashMap::from([("EUR".to_string(), "€".to_string())]),
    }
}

pub fn de_de_date_time() -> DateTimeData {
    let gregory = CalendarData {
        months: NameTable {
            narrow: None,
            short: None,
            long: names(&[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ]),
        },
        days: NameTable {
            narrow: None,
            short: None,
            long: names(&[
                "Sonntag",
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
            ]),
        },
        eras: NameTable::default(),
        day_periods: None,
    };
    DateTimeData {
        calendars: vec!["gregory".to_string()],
        numbering_systems: Vec::new(),
        hour12: false,
        hour_no0: false,
        formats: vec![
            FormatTemplate {
                day: Some(ComponentWidth::TwoDigit),
                month: Some(ComponentWidth::TwoDigit),
                year: Some(ComponentWidth::Numeric),
                pattern: "{day}.{month}.{year}".to_string(),
                ..FormatTemplate::default()
            },
            FormatTemplate {
                hour: Some(ComponentWidth::TwoDigit),
                minute: Some(ComponentWidth::TwoDigit),
                pattern: "{hour}:{minute}".to_string(),
                ..FormatTemplate::default()
            },
        ],
        calendar_data: HashMap::from([("gregory".to_string(), gregory)]),
    }
}

/// Thai number data listing two numbering systems, latn first.
pub fn th_number() -> NumberData {
    NumberData {
        numbering_systems: vec!["latn".to_string(), "thai".to_string()],
        patterns: NumberPatterns {
            decimal: style("{number}", "-{number}"),
            percent: style("{number}%", "-{number}%"),
            currency: style("{currency}{number}", "-{currency}{number}"),
            primary_group_size: None,
            secondary_group_size: None,
        },
        symbols: HashMap::from([
            ("latn".to_string(), latn_symbols(".", ",")),
            ("thai".to_string(), latn_symbols(".", ",")),
        ]),
        currencies: HashMap::new(),
    }
}

/// Indian-style grouping: primary group of 3, secondary groups of 2.
pub fn hi_in_number() -> NumberData {
    NumberData {
        numbering_systems: vec!["latn".to_string()],
        patterns: NumberPatterns {
            decimal: style("{number}", "-{number}"),
            percent: style("{number}%", "-{number}%"),
            currency: style("{currency} {number}", "-{currency} {number}"),
            primary_group_size: Some(3),
            secondary_group_size: Some(2),
        },
        symbols: HashMap::from([("latn".to_string(), latn_symbols(".", ","))]),
        currencies: HashMap::new(),
    }
}

/// A registry with the standard fixture locales. "en-US" is registered
/// first and therefore is the default locale.
pub fn registry() -> LocaleRegistry {
    let mut registry = LocaleRegistry::new();
    registry
        .register("en-US", en_us_number(), Some(en_us_date_time()))
        .unwrap();
    registry
        .register("de-DE", de_de_number(), Some(de_de_date_time()))
        .unwrap();
    registry.register("th", th_number(), None).unwrap();
    registry.register("hi-IN", hi_in_number(), None).unwrap();
    registry
}
