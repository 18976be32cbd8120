//! CLDR-style locale data shapes accepted by the registry.
//!
//! Data payloads are treated as opaque, pre-validated tables: the shapes
//! below describe the minimum each formatting engine requires, and the
//! serde derives let payloads be ingested from JSON. Number data is
//! mandatory for every registered locale; date/time data is optional and
//! borrows its numeral-digit preference list from the number data at
//! registration time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Formatting data for the number engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberData {
    /// Numbering system preference list ("nu"); the first entry is the
    /// default.
    #[serde(rename = "nu")]
    pub numbering_systems: Vec<String>,

    /// Decimal, percent, and currency pattern pairs plus grouping sizes.
    pub patterns: NumberPatterns,

    /// Symbol tables keyed by numbering system; "latn" is required.
    pub symbols: HashMap<String, NumberSymbols>,

    /// Currency code to localized symbol (e.g. "USD" -> "$").
    #[serde(default)]
    pub currencies: HashMap<String, String>,
}

/// Pattern pairs per style and the locale's digit grouping sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberPatterns {
    pub decimal: StylePatterns,
    pub percent: StylePatterns,
    pub currency: StylePatterns,

    /// Size of the group closest to the decimal point; 3 when absent.
    #[serde(default)]
    pub primary_group_size: Option<u8>,

    /// Size of every other group; the primary size when absent.
    #[serde(default)]
    pub secondary_group_size: Option<u8>,
}

/// Positive/negative pattern templates. Patterns contain a `{number}`
/// placeholder and, for the currency style, a `{currency}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePatterns {
    #[serde(rename = "positivePattern")]
    pub positive: String,
    #[serde(rename = "negativePattern")]
    pub negative: String,
}

/// Glyphs for one numbering system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSymbols {
    pub decimal: String,
    pub group: String,
    pub nan: String,
    pub infinity: String,
    #[serde(rename = "percentSign")]
    pub percent_sign: String,
    #[serde(rename = "plusSign")]
    pub plus_sign: String,
    #[serde(rename = "minusSign")]
    pub minus_sign: String,
}

/// Formatting data for the date/time engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeData {
    /// Calendar preference list ("ca"); the first entry is the default.
    #[serde(rename = "ca")]
    pub calendars: Vec<String>,

    /// Numbering system preference list; overwritten with the locale's
    /// number data list when the locale is registered.
    #[serde(rename = "nu", default)]
    pub numbering_systems: Vec<String>,

    /// Whether the locale prefers a 12-hour clock by default.
    pub hour12: bool,

    /// Whether hour zero is represented as 12 in 12-hour mode.
    #[serde(rename = "hourNo0", default)]
    pub hour_no0: bool,

    /// Library of predefined component-set to pattern templates.
    pub formats: Vec<FormatTemplate>,

    /// Per-calendar name tables; "gregory" is required.
    #[serde(rename = "calendars")]
    pub calendar_data: HashMap<String, CalendarData>,
}

/// One predefined format: the component widths it renders plus its pattern
/// strings. `pattern` uses `{component}` placeholders; `pattern12` is the
/// AM/PM-aware variant (with an `{ampm}` placeholder) for templates that
/// include an hour component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatTemplate {
    #[serde(default)]
    pub weekday: Option<ComponentWidth>,
    #[serde(default)]
    pub era: Option<ComponentWidth>,
    #[serde(default)]
    pub year: Option<ComponentWidth>,
    #[serde(default)]
    pub month: Option<ComponentWidth>,
    #[serde(default)]
    pub day: Option<ComponentWidth>,
    #[serde(default)]
    pub hour: Option<ComponentWidth>,
    #[serde(default)]
    pub minute: Option<ComponentWidth>,
    #[serde(default)]
    pub second: Option<ComponentWidth>,
    #[serde(default, rename = "timeZoneName")]
    pub time_zone_name: Option<ComponentWidth>,
    pub pattern: String,
    #[serde(default)]
    pub pattern12: Option<String>,
}

impl FormatTemplate {
    /// Width offered for a component, by pattern placeholder name.
    pub(crate) fn component(&self, name: &str) -> Option<ComponentWidth> {
        match name {
            "weekday" => self.weekday,
            "era" => self.era,
            "year" => self.year,
            "month" => self.month,
            "day" => self.day,
            "hour" => self.hour,
            "minute" => self.minute,
            "second" => self.second,
            "timeZoneName" => self.time_zone_name,
            _ => None,
        }
    }
}

/// Requested or offered width of a date/time component. The declaration
/// order is the width-distance scale used by the format matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentWidth {
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "narrow")]
    Narrow,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
}

impl ComponentWidth {
    /// Position on the 2-digit < numeric < narrow < short < long scale.
    pub(crate) fn scale_index(self) -> i32 {
        match self {
            ComponentWidth::TwoDigit => 0,
            ComponentWidth::Numeric => 1,
            ComponentWidth::Narrow => 2,
            ComponentWidth::Short => 3,
            ComponentWidth::Long => 4,
        }
    }

    /// Whether this width renders through the number engine.
    pub(crate) fn is_numeric(self) -> bool {
        matches!(self, ComponentWidth::TwoDigit | ComponentWidth::Numeric)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentWidth::TwoDigit => "2-digit",
            ComponentWidth::Numeric => "numeric",
            ComponentWidth::Narrow => "narrow",
            ComponentWidth::Short => "short",
            ComponentWidth::Long => "long",
        }
    }
}

/// Month, weekday, and era name tables plus day periods for one calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarData {
    #[serde(default)]
    pub months: NameTable,
    #[serde(default)]
    pub days: NameTable,
    #[serde(default)]
    pub eras: NameTable,
    #[serde(default, rename = "dayPeriods")]
    pub day_periods: Option<DayPeriods>,
}

/// Names per width for one component. Missing widths resolve sideways
/// (narrow falls back to short then long, and symmetrically).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameTable {
    #[serde(default)]
    pub narrow: Option<Vec<String>>,
    #[serde(default)]
    pub short: Option<Vec<String>>,
    #[serde(default)]
    pub long: Option<Vec<String>>,
}

impl NameTable {
    pub(crate) fn is_empty(&self) -> bool {
        self.narrow.is_none() && self.short.is_none() && self.long.is_none()
    }

    /// Resolves a width with sideways inheritance before giving up.
    pub(crate) fn resolve(&self, width: ComponentWidth) -> Option<&[String]> {
        let order: [&Option<Vec<String>>; 3] = match width {
            ComponentWidth::Narrow => [&self.narrow, &self.short, &self.long],
            ComponentWidth::Short => [&self.short, &self.long, &self.narrow],
            _ => [&self.long, &self.short, &self.narrow],
        };
        order
            .into_iter()
            .find_map(|names| names.as_ref().map(Vec::as_slice))
    }
}

/// AM/PM glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPeriods {
    pub am: String,
    pub pm: String,
}
