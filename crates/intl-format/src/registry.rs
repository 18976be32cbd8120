//! Locale data registry.
//!
//! The registry is a plain owned value: callers construct one, feed it
//! data with [`LocaleRegistry::register`], and hand references to the
//! formatter constructors. There is no global state.

use std::collections::HashMap;

use crate::data::{DateTimeData, NumberData};
use crate::error::IntlError;
use crate::tag;

/// Which formatting engine a lookup is on behalf of. Number data is
/// mandatory for every registered locale, so the date/time availability
/// set can be narrower than the number one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    Number,
    DateTime,
}

/// Stores per-locale formatting data and answers availability queries.
#[derive(Debug, Default, Clone)]
pub struct LocaleRegistry {
    number: HashMap<String, NumberData>,
    date_time: HashMap<String, DateTimeData>,
    number_order: Vec<String>,
    date_time_order: Vec<String>,
    default_locale: Option<String>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers formatting data under a canonicalized locale tag.
    ///
    /// The first registered locale becomes the registry default. When the
    /// tag carries a script subtag, the same data is also filed under the
    /// script-free `language-region` alias so that lookups like "zh-TW"
    /// can land on data registered as "zh-Hant-TW". Date/time data
    /// inherits the number data's numbering system preference list.
    pub fn register(
        &mut self,
        locale: &str,
        number: NumberData,
        date_time: Option<DateTimeData>,
    ) -> Result<(), IntlError> {
        if !tag::is_structurally_valid(locale) {
            return Err(IntlError::InvalidLanguageTag { tag: locale.to_string() });
        }
        let canonical = tag::canonicalize(locale);

        let date_time = date_time.map(|mut data| {
            data.numbering_systems = number.numbering_systems.clone();
            data
        });

        self.insert(&canonical, number.clone(), date_time.clone());

        // zh-Hant-TW also answers for zh-TW.
        let parts: Vec<&str> = canonical.split('-').collect();
        if parts.len() > 2 && parts[1].len() == 4 {
            let alias = format!("{}-{}", parts[0], parts[2]);
            if !self.number.contains_key(&alias) {
                self.insert(&alias, number, date_time);
            }
        }

        self.default_locale.get_or_insert(canonical);
        Ok(())
    }

    fn insert(&mut self, locale: &str, number: NumberData, date_time: Option<DateTimeData>) {
        if self.number.insert(locale.to_string(), number).is_none() {
            self.number_order.push(locale.to_string());
        }
        if let Some(data) = date_time {
            if self.date_time.insert(locale.to_string(), data).is_none() {
                self.date_time_order.push(locale.to_string());
            }
        }
    }

    /// The first locale ever registered, if any.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Registered locales for one engine, in registration order.
    pub fn available_locales(&self, kind: FormatterKind) -> &[String] {
        match kind {
            FormatterKind::Number => &self.number_order,
            FormatterKind::DateTime => &self.date_time_order,
        }
    }

    /// Locales with number data, in registration order.
    pub fn number_locales(&self) -> &[String] {
        &self.number_order
    }

    /// Locales with date/time data, in registration order.
    pub fn date_time_locales(&self) -> &[String] {
        &self.date_time_order
    }

    /// Exact-tag lookup; no fallback is attempted here.
    pub fn number_data(&self, locale: &str) -> Option<&NumberData> {
        self.number.get(locale)
    }

    /// Exact-tag lookup; no fallback is attempted here.
    pub fn date_time_data(&self, locale: &str) -> Option<&DateTimeData> {
        self.date_time.get(locale)
    }

    /// Whether `locale` has data for `kind`, by exact tag.
    pub fn contains(&self, kind: FormatterKind, locale: &str) -> bool {
        match kind {
            FormatterKind::Number => self.number.contains_key(locale),
            FormatterKind::DateTime => self.date_time.contains_key(locale),
        }
    }

    /// Supported values for a unicode extension key ("nu" or "ca") in the
    /// data filed under `locale`. The first entry is the locale default.
    pub fn extension_values(&self, kind: FormatterKind, locale: &str, key: &str) -> &[String] {
        match (kind, key) {
            (FormatterKind::Number, "nu") => self
                .number
                .get(locale)
                .map(|data| data.numbering_systems.as_slice())
                .unwrap_or_default(),
            (FormatterKind::DateTime, "nu") => self
                .date_time
                .get(locale)
                .map(|data| data.numbering_systems.as_slice())
                .unwrap_or_default(),
            (FormatterKind::DateTime, "ca") => self
                .date_time
                .get(locale)
                .map(|data| data.calendars.as_slice())
                .unwrap_or_default(),
            _ => &[],
        }
    }
}
