//! Error types for locale resolution and formatting.

use thiserror::Error;

/// Errors surfaced by formatter construction and formatting.
///
/// Validity and range errors are raised eagerly at construction time and are
/// never recovered internally. Optional display richness (unknown currency
/// symbols, unsupported numbering systems, non-Gregorian calendar math)
/// degrades silently instead of erroring; the one documented exception is
/// missing weekday name data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntlError {
    /// Input is not a structurally valid BCP 47 language tag.
    #[error("'{tag}' is not a structurally valid language tag")]
    InvalidLanguageTag { tag: String },

    /// Currency code is not three ASCII letters.
    #[error("'{code}' is not a valid currency code")]
    InvalidCurrencyCode { code: String },

    /// Currency style was requested without a currency code.
    #[error("currency code is required when style is currency")]
    MissingCurrency,

    /// Option value is outside its allowed enumeration.
    #[error("'{value}' is not an allowed value for `{option}`")]
    InvalidOptionValue { option: &'static str, value: String },

    /// Numeric option is outside its accepted range.
    #[error("{value} is outside the accepted range [{min}, {max}] for `{option}`")]
    OptionOutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Only the "UTC" time zone is supported.
    #[error("time zone '{zone}' is not supported")]
    UnsupportedTimeZone { zone: String },

    /// No locale data has been registered for the requested formatter kind.
    #[error("no locale data has been provided for this formatter yet")]
    NoLocaleData,

    /// Non-finite or out-of-range time value passed to date formatting.
    #[error("{value} is not a valid time value")]
    InvalidTimeValue { value: f64 },

    /// Weekday name data is missing for the resolved locale.
    #[error("could not find weekday data for locale '{locale}'")]
    MissingWeekdayNames { locale: String },
}
