//! Locale-sensitive date and time formatting.
//!
//! A [`DateTimeFormat`] negotiates a locale, scores the locale's
//! predefined format templates against the requested components, and
//! snapshots the winning pattern together with the calendar name tables
//! and two helper number formatters, so each `format` call only has to
//! decompose the time value and fill in placeholders.

mod fields;

use std::collections::HashMap;

use bon::Builder;
use chrono::Utc;

use crate::data::{CalendarData, ComponentWidth, FormatTemplate, NameTable};
use crate::error::IntlError;
use crate::matcher::{self, LocaleMatcher};
use crate::number::{NumberFormat, NumberFormatOptions};
use crate::registry::{FormatterKind, LocaleRegistry};

/// Template scoring algorithm selector. Best-fit adds a penalty for
/// crossing the numeric/named divide; both are otherwise the same
/// scoring function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatMatcher {
    Basic,
    #[default]
    BestFit,
}

impl FormatMatcher {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatMatcher::Basic => "basic",
            FormatMatcher::BestFit => "best fit",
        }
    }
}

/// Options accepted by [`DateTimeFormat::new`].
///
/// When none of the date or time components is requested, the formatter
/// defaults to numeric year, month, and day.
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct DateTimeFormatOptions {
    #[builder(default)]
    pub locale_matcher: LocaleMatcher,
    #[builder(default)]
    pub format_matcher: FormatMatcher,
    /// Narrow, short, or long.
    pub weekday: Option<ComponentWidth>,
    /// Narrow, short, or long.
    pub era: Option<ComponentWidth>,
    /// 2-digit or numeric.
    pub year: Option<ComponentWidth>,
    /// Any width.
    pub month: Option<ComponentWidth>,
    /// 2-digit or numeric.
    pub day: Option<ComponentWidth>,
    /// 2-digit or numeric.
    pub hour: Option<ComponentWidth>,
    /// 2-digit or numeric.
    pub minute: Option<ComponentWidth>,
    /// 2-digit or numeric.
    pub second: Option<ComponentWidth>,
    /// Short or long; renders as the empty string (no zone name data).
    pub time_zone_name: Option<ComponentWidth>,
    /// Overrides the locale's default hour cycle.
    pub hour12: Option<bool>,
    /// Only "UTC" (case-insensitive) is supported; absent means the
    /// system's local zone.
    pub time_zone: Option<String>,
    /// Calendar override; silently ignored when the locale's data does
    /// not list it.
    pub calendar: Option<String>,
    /// Numbering system override; silently ignored when the locale's
    /// data does not list it.
    pub numbering_system: Option<String>,
}

/// The settings a constructed formatter actually operates with. The
/// component widths are those of the chosen template, which may differ
/// from the requested ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDateTimeOptions {
    pub locale: String,
    pub calendar: String,
    pub numbering_system: String,
    pub time_zone: Option<String>,
    /// Present only when the chosen template renders an hour.
    pub hour12: Option<bool>,
    pub weekday: Option<ComponentWidth>,
    pub era: Option<ComponentWidth>,
    pub year: Option<ComponentWidth>,
    pub month: Option<ComponentWidth>,
    pub day: Option<ComponentWidth>,
    pub hour: Option<ComponentWidth>,
    pub minute: Option<ComponentWidth>,
    pub second: Option<ComponentWidth>,
    pub time_zone_name: Option<ComponentWidth>,
}

/// A date/time formatter bound to one locale, template, and option set.
#[derive(Debug, Clone)]
pub struct DateTimeFormat {
    resolved: ResolvedDateTimeOptions,
    pattern: String,
    hour_no0: bool,
    calendar: CalendarData,
    numbers: NumberFormat,
    two_digit_numbers: NumberFormat,
}

const COMPONENT_NAMES: [&str; 9] = [
    "weekday",
    "era",
    "year",
    "month",
    "day",
    "hour",
    "minute",
    "second",
    "timeZoneName",
];

impl DateTimeFormat {
    /// Negotiates a locale from `locales` against `registry`, selects the
    /// best matching format template, and builds a formatter.
    pub fn new<S: AsRef<str>>(
        registry: &LocaleRegistry,
        locales: &[S],
        options: DateTimeFormatOptions,
    ) -> Result<DateTimeFormat, IntlError> {
        let requested = matcher::canonicalize_locale_list(locales)?;
        let resolved = matcher::resolve_locale(
            registry,
            FormatterKind::DateTime,
            &requested,
            options.locale_matcher,
            options.numbering_system.as_deref(),
            options.calendar.as_deref(),
        )?;
        let data = registry
            .date_time_data(&resolved.data_locale)
            .ok_or(IntlError::NoLocaleData)?;

        let time_zone = match &options.time_zone {
            Some(zone) => {
                let normalized = zone.to_ascii_uppercase();
                if normalized != "UTC" {
                    return Err(IntlError::UnsupportedTimeZone { zone: zone.clone() });
                }
                Some(normalized)
            }
            None => None,
        };

        let wanted = requested_components(&options)?;
        let template = select_template(&wanted, &data.formats, options.format_matcher)
            .ok_or(IntlError::NoLocaleData)?;

        // The hour cycle and pattern come from the chosen template, not
        // from the request.
        let (hour12, hour_no0, pattern) = if template.hour.is_some() {
            let hour12 = options.hour12.unwrap_or(data.hour12);
            let pattern = if hour12 {
                template.pattern12.clone().unwrap_or_else(|| template.pattern.clone())
            } else {
                template.pattern.clone()
            };
            (Some(hour12), hour12 && data.hour_no0, pattern)
        } else {
            (None, false, template.pattern.clone())
        };

        let calendar_name = resolved.calendar.clone().unwrap_or_default();
        let calendar = snapshot_calendar(&data.calendar_data, &calendar_name);

        // Component values render through the number engine so that a
        // requested numbering system carries over; the resolved tag
        // already embeds it.
        let helper_locales = [resolved.locale.clone()];
        let numbers = NumberFormat::new(
            registry,
            &helper_locales,
            NumberFormatOptions::builder()
                .use_grouping(false)
                .numbering_system(resolved.numbering_system.clone())
                .build(),
        )?;
        let two_digit_numbers = NumberFormat::new(
            registry,
            &helper_locales,
            NumberFormatOptions::builder()
                .use_grouping(false)
                .numbering_system(resolved.numbering_system.clone())
                .minimum_integer_digits(2)
                .build(),
        )?;

        Ok(DateTimeFormat {
            resolved: ResolvedDateTimeOptions {
                locale: resolved.locale,
                calendar: calendar_name,
                numbering_system: resolved.numbering_system,
                time_zone,
                hour12,
                weekday: template.weekday,
                era: template.era,
                year: template.year,
                month: template.month,
                day: template.day,
                hour: template.hour,
                minute: template.minute,
                second: template.second,
                time_zone_name: template.time_zone_name,
            },
            pattern,
            hour_no0,
            calendar,
            numbers,
            two_digit_numbers,
        })
    }

    /// The requested locales this registry could serve with date/time
    /// data.
    pub fn supported_locales_of<S: AsRef<str>>(
        registry: &LocaleRegistry,
        locales: &[S],
        options: DateTimeFormatOptions,
    ) -> Result<Vec<String>, IntlError> {
        matcher::supported_locales_of(
            registry,
            FormatterKind::DateTime,
            locales,
            options.locale_matcher,
        )
    }

    /// Formats an epoch-millisecond time value.
    pub fn format(&self, time_value: f64) -> Result<String, IntlError> {
        if !time_value.is_finite() {
            return Err(IntlError::InvalidTimeValue { value: time_value });
        }
        let fields = fields::decompose(time_value, self.resolved.time_zone.is_some())
            .ok_or(IntlError::InvalidTimeValue { value: time_value })?;

        let mut hour = fields.hour;
        let mut pm = false;
        if self.resolved.hour12 == Some(true) {
            pm = hour >= 12;
            hour %= 12;
            if hour == 0 && self.hour_no0 {
                hour = 12;
            }
        }

        let mut result = self.pattern.clone();
        for name in COMPONENT_NAMES {
            let Some(width) = self.resolved_component(name) else {
                continue;
            };
            let value = match name {
                "weekday" => self.weekday_name(width, fields.weekday)?,
                "era" => self.era_name(width, fields.year),
                "year" => {
                    let displayed =
                        if fields.year <= 0 { 1 - fields.year } else { fields.year };
                    self.render_numeric(width, f64::from(displayed))
                }
                "month" => self.month_name(width, fields.month0),
                "day" => self.render_numeric(width, f64::from(fields.day)),
                "hour" => self.render_numeric(width, f64::from(hour)),
                "minute" => self.render_numeric(width, f64::from(fields.minute)),
                "second" => self.render_numeric(width, f64::from(fields.second)),
                // No zone name data is carried; the documented fallback.
                _ => String::new(),
            };
            result = result.replacen(&format!("{{{name}}}"), &value, 1);
        }
        let period = self.day_period(pm);
        result = result.replacen("{ampm}", period, 1);
        Ok(result)
    }

    /// Formats the current system time.
    pub fn format_now(&self) -> Result<String, IntlError> {
        let now = Utc::now().timestamp_millis();
        self.format(now as f64)
    }

    pub fn resolved_options(&self) -> ResolvedDateTimeOptions {
        self.resolved.clone()
    }

    fn resolved_component(&self, name: &str) -> Option<ComponentWidth> {
        match name {
            "weekday" => self.resolved.weekday,
            "era" => self.resolved.era,
            "year" => self.resolved.year,
            "month" => self.resolved.month,
            "day" => self.resolved.day,
            "hour" => self.resolved.hour,
            "minute" => self.resolved.minute,
            "second" => self.resolved.second,
            "timeZoneName" => self.resolved.time_zone_name,
            _ => None,
        }
    }

    fn render_numeric(&self, width: ComponentWidth, value: f64) -> String {
        match width {
            ComponentWidth::TwoDigit => {
                let rendered = self.two_digit_numbers.format(value);
                let chars: Vec<char> = rendered.chars().collect();
                if chars.len() > 2 {
                    chars[chars.len() - 2..].iter().collect()
                } else {
                    rendered
                }
            }
            _ => self.numbers.format(value),
        }
    }

    fn weekday_name(&self, width: ComponentWidth, weekday: u32) -> Result<String, IntlError> {
        self.calendar
            .days
            .resolve(width)
            .and_then(|names| names.get(weekday as usize))
            .cloned()
            .ok_or_else(|| IntlError::MissingWeekdayNames {
                locale: self.resolved.locale.clone(),
            })
    }

    /// Months render by name when the data has one, and degrade to the
    /// 1-based number otherwise.
    fn month_name(&self, width: ComponentWidth, month0: u32) -> String {
        if width.is_numeric() {
            return self.render_numeric(width, f64::from(month0 + 1));
        }
        self.calendar
            .months
            .resolve(width)
            .and_then(|names| names.get(month0 as usize))
            .cloned()
            .unwrap_or_else(|| self.numbers.format(f64::from(month0 + 1)))
    }

    /// Eras render by name when the data has one, and degrade to the raw
    /// era index otherwise.
    fn era_name(&self, width: ComponentWidth, year: i32) -> String {
        let era = u32::from(year > 0);
        self.calendar
            .eras
            .resolve(width)
            .and_then(|names| names.get(era as usize))
            .cloned()
            .unwrap_or_else(|| self.numbers.format(f64::from(era)))
    }

    fn day_period(&self, pm: bool) -> &str {
        match &self.calendar.day_periods {
            Some(periods) if pm => &periods.pm,
            Some(periods) => &periods.am,
            None => "",
        }
    }
}

/// Validates the requested component widths and applies the
/// year/month/day defaults when no component was requested at all.
fn requested_components(
    options: &DateTimeFormatOptions,
) -> Result<FormatTemplate, IntlError> {
    use ComponentWidth::{Long, Narrow, Numeric, Short, TwoDigit};

    const NAMED: [ComponentWidth; 3] = [Narrow, Short, Long];
    const NUMERIC: [ComponentWidth; 2] = [TwoDigit, Numeric];
    const ZONE: [ComponentWidth; 2] = [Short, Long];

    validate_width("weekday", options.weekday, &NAMED)?;
    validate_width("era", options.era, &NAMED)?;
    validate_width("year", options.year, &NUMERIC)?;
    validate_width("day", options.day, &NUMERIC)?;
    validate_width("hour", options.hour, &NUMERIC)?;
    validate_width("minute", options.minute, &NUMERIC)?;
    validate_width("second", options.second, &NUMERIC)?;
    validate_width("timeZoneName", options.time_zone_name, &ZONE)?;

    let mut wanted = FormatTemplate {
        weekday: options.weekday,
        era: options.era,
        year: options.year,
        month: options.month,
        day: options.day,
        hour: options.hour,
        minute: options.minute,
        second: options.second,
        time_zone_name: options.time_zone_name,
        ..FormatTemplate::default()
    };
    let needs_defaults = [
        wanted.weekday,
        wanted.year,
        wanted.month,
        wanted.day,
        wanted.hour,
        wanted.minute,
        wanted.second,
    ]
    .iter()
    .all(Option::is_none);
    if needs_defaults {
        wanted.year = Some(Numeric);
        wanted.month = Some(Numeric);
        wanted.day = Some(Numeric);
    }
    Ok(wanted)
}

fn validate_width(
    option: &'static str,
    width: Option<ComponentWidth>,
    allowed: &[ComponentWidth],
) -> Result<(), IntlError> {
    match width {
        Some(width) if !allowed.contains(&width) => Err(IntlError::InvalidOptionValue {
            option,
            value: width.as_str().to_string(),
        }),
        _ => Ok(()),
    }
}

/// Scores every template and returns the best one; earlier templates win
/// ties.
fn select_template<'a>(
    wanted: &FormatTemplate,
    formats: &'a [FormatTemplate],
    format_matcher: FormatMatcher,
) -> Option<&'a FormatTemplate> {
    let best_fit = format_matcher == FormatMatcher::BestFit;
    let mut best: Option<(&FormatTemplate, i32)> = None;
    for template in formats {
        let score = calculate_score(wanted, template, best_fit);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((template, score)),
        }
    }
    best.map(|(template, _)| template)
}

fn calculate_score(wanted: &FormatTemplate, offered: &FormatTemplate, best_fit: bool) -> i32 {
    const REMOVAL_PENALTY: i32 = 120;
    const ADDITION_PENALTY: i32 = 20;
    const LONG_LESS_PENALTY: i32 = 8;
    const LONG_MORE_PENALTY: i32 = 6;
    const SHORT_LESS_PENALTY: i32 = 6;
    const SHORT_MORE_PENALTY: i32 = 3;
    const DIFFERENT_KIND_PENALTY: i32 = 8;

    let mut score = 0;
    for name in COMPONENT_NAMES {
        match (wanted.component(name), offered.component(name)) {
            (None, Some(_)) => score -= ADDITION_PENALTY,
            (Some(_), None) => score -= REMOVAL_PENALTY,
            (Some(wanted_width), Some(offered_width)) => {
                if best_fit && wanted_width.is_numeric() != offered_width.is_numeric() {
                    score -= DIFFERENT_KIND_PENALTY;
                }
                let delta =
                    (offered_width.scale_index() - wanted_width.scale_index()).clamp(-2, 2);
                score -= match delta {
                    2 => LONG_MORE_PENALTY,
                    1 => SHORT_MORE_PENALTY,
                    -1 => SHORT_LESS_PENALTY,
                    -2 => LONG_LESS_PENALTY,
                    _ => 0,
                };
            }
            (None, None) => {}
        }
    }
    score
}

/// Snapshots the name tables for one calendar, falling back to the
/// Gregorian tables per component.
fn snapshot_calendar(
    calendars: &HashMap<String, CalendarData>,
    calendar: &str,
) -> CalendarData {
    let empty = CalendarData::default();
    let chosen = calendars.get(calendar).unwrap_or(&empty);
    let gregory = calendars.get("gregory").unwrap_or(&empty);

    fn pick(primary: &NameTable, fallback: &NameTable) -> NameTable {
        if primary.is_empty() { fallback.clone() } else { primary.clone() }
    }

    CalendarData {
        months: pick(&chosen.months, &gregory.months),
        days: pick(&chosen.days, &gregory.days),
        eras: pick(&chosen.eras, &gregory.eras),
        day_periods: chosen
            .day_periods
            .clone()
            .or_else(|| gregory.day_periods.clone()),
    }
}
