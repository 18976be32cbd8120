//! Locale-sensitive number formatting.
//!
//! A [`NumberFormat`] snapshots everything it needs from the registry at
//! construction time (patterns, symbols, grouping sizes, the currency
//! display string), so formatting itself is infallible and allocation
//! happens only for the output string.

mod digits;

use std::f64::consts;

use bon::Builder;

use crate::data::NumberSymbols;
use crate::error::IntlError;
use crate::matcher::{self, LocaleMatcher};
use crate::registry::{FormatterKind, LocaleRegistry};

/// ISO 4217 currencies whose minor unit is not the usual 2.
static CURRENCY_MINOR_UNITS: &[(&str, u32)] = &[
    ("BHD", 3),
    ("BIF", 0),
    ("BYR", 0),
    ("CLF", 0),
    ("CLP", 0),
    ("DJF", 0),
    ("GNF", 0),
    ("IQD", 3),
    ("ISK", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LYD", 3),
    ("OMR", 3),
    ("PYG", 0),
    ("RWF", 0),
    ("TND", 3),
    ("UGX", 0),
    ("UYI", 0),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
];

/// Minor unit count for an upper-case ISO 4217 code; 2 when unlisted.
fn currency_digits(currency: &str) -> u32 {
    CURRENCY_MINOR_UNITS
        .iter()
        .find(|(code, _)| *code == currency)
        .map_or(2, |(_, digits)| *digits)
}

/// Formatting style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
}

impl NumberStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberStyle::Decimal => "decimal",
            NumberStyle::Percent => "percent",
            NumberStyle::Currency => "currency",
        }
    }
}

/// How the currency is rendered in currency style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Code,
    #[default]
    Symbol,
    /// Long names are not carried in the data model; renders the code.
    Name,
}

impl CurrencyDisplay {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyDisplay::Code => "code",
            CurrencyDisplay::Symbol => "symbol",
            CurrencyDisplay::Name => "name",
        }
    }
}

/// Options accepted by [`NumberFormat::new`].
///
/// Digit-count options are validated against their allowed ranges at
/// construction. Supplying either significant-digit option switches the
/// formatter into significant-digit mode.
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct NumberFormatOptions {
    #[builder(default)]
    pub locale_matcher: LocaleMatcher,
    #[builder(default)]
    pub style: NumberStyle,
    /// ISO 4217 code; required for, and only meaningful in, currency style.
    pub currency: Option<String>,
    #[builder(default)]
    pub currency_display: CurrencyDisplay,
    /// Numbering system override; silently ignored when the locale's data
    /// does not list it.
    pub numbering_system: Option<String>,
    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub use_grouping: Option<bool>,
}

/// The settings a constructed formatter actually operates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNumberOptions {
    pub locale: String,
    pub numbering_system: String,
    pub style: NumberStyle,
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub use_grouping: bool,
}

/// A number formatter bound to one locale and option set.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    resolved: ResolvedNumberOptions,
    positive_pattern: String,
    negative_pattern: String,
    symbols: NumberSymbols,
    primary_group: usize,
    secondary_group: usize,
    currency_render: Option<String>,
}

impl NumberFormat {
    /// Negotiates a locale from `locales` against `registry` and builds a
    /// formatter.
    pub fn new<S: AsRef<str>>(
        registry: &LocaleRegistry,
        locales: &[S],
        options: NumberFormatOptions,
    ) -> Result<NumberFormat, IntlError> {
        let requested = matcher::canonicalize_locale_list(locales)?;
        let resolved = matcher::resolve_locale(
            registry,
            FormatterKind::Number,
            &requested,
            options.locale_matcher,
            options.numbering_system.as_deref(),
            None,
        )?;
        let data = registry
            .number_data(&resolved.data_locale)
            .ok_or(IntlError::NoLocaleData)?;

        let currency = match options.style {
            NumberStyle::Currency => {
                let code = options.currency.ok_or(IntlError::MissingCurrency)?;
                if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(IntlError::InvalidCurrencyCode { code });
                }
                Some(code.to_ascii_uppercase())
            }
            _ => None,
        };

        let minimum_integer_digits =
            get_digit_option(options.minimum_integer_digits, "minimumIntegerDigits", 1, 21, 1)?;
        let minimum_fraction_default = match &currency {
            Some(code) => currency_digits(code),
            None => 0,
        };
        let minimum_fraction_digits = get_digit_option(
            options.minimum_fraction_digits,
            "minimumFractionDigits",
            0,
            20,
            minimum_fraction_default,
        )?;
        let maximum_fraction_default = match options.style {
            NumberStyle::Currency => minimum_fraction_digits.max(minimum_fraction_default),
            NumberStyle::Percent => minimum_fraction_digits,
            NumberStyle::Decimal => minimum_fraction_digits.max(3),
        };
        let maximum_fraction_digits = get_digit_option(
            options.maximum_fraction_digits,
            "maximumFractionDigits",
            minimum_fraction_digits,
            20,
            maximum_fraction_default,
        )?;

        let significant = if options.minimum_significant_digits.is_some()
            || options.maximum_significant_digits.is_some()
        {
            let minimum = get_digit_option(
                options.minimum_significant_digits,
                "minimumSignificantDigits",
                1,
                21,
                1,
            )?;
            let maximum = get_digit_option(
                options.maximum_significant_digits,
                "maximumSignificantDigits",
                minimum,
                21,
                21,
            )?;
            Some((minimum, maximum))
        } else {
            None
        };

        let patterns = match options.style {
            NumberStyle::Decimal => &data.patterns.decimal,
            NumberStyle::Percent => &data.patterns.percent,
            NumberStyle::Currency => &data.patterns.currency,
        };
        let symbols = data
            .symbols
            .get(&resolved.numbering_system)
            .or_else(|| data.symbols.get("latn"))
            .ok_or(IntlError::NoLocaleData)?
            .clone();
        // Zero-size groups in the data fall back like absent ones.
        let primary_group =
            data.patterns.primary_group_size.filter(|&size| size > 0).unwrap_or(3) as usize;
        let secondary_group = data
            .patterns
            .secondary_group_size
            .filter(|&size| size > 0)
            .map_or(primary_group, usize::from);

        let currency_render = currency.as_ref().map(|code| match options.currency_display {
            CurrencyDisplay::Symbol => data.currencies.get(code).cloned().unwrap_or_else(|| code.clone()),
            CurrencyDisplay::Code | CurrencyDisplay::Name => code.clone(),
        });

        Ok(NumberFormat {
            resolved: ResolvedNumberOptions {
                locale: resolved.locale,
                numbering_system: resolved.numbering_system,
                style: options.style,
                currency_display: currency.as_ref().map(|_| options.currency_display),
                currency,
                minimum_integer_digits,
                minimum_fraction_digits,
                maximum_fraction_digits,
                minimum_significant_digits: significant.map(|(min, _)| min),
                maximum_significant_digits: significant.map(|(_, max)| max),
                use_grouping: options.use_grouping.unwrap_or(true),
            },
            positive_pattern: patterns.positive.clone(),
            negative_pattern: patterns.negative.clone(),
            symbols,
            primary_group,
            secondary_group,
            currency_render,
        })
    }

    /// The requested locales this registry could serve with number data.
    pub fn supported_locales_of<S: AsRef<str>>(
        registry: &LocaleRegistry,
        locales: &[S],
        options: NumberFormatOptions,
    ) -> Result<Vec<String>, IntlError> {
        matcher::supported_locales_of(
            registry,
            FormatterKind::Number,
            locales,
            options.locale_matcher,
        )
    }

    /// Formats a value. NaN and the infinities render through the locale's
    /// symbol table rather than erroring.
    pub fn format(&self, value: f64) -> String {
        let mut negative = false;
        let n = if value.is_nan() {
            self.symbols.nan.clone()
        } else if value.is_infinite() {
            negative = value < 0.0;
            self.symbols.infinity.clone()
        } else {
            let mut x = value;
            if x < 0.0 {
                negative = true;
                x = -x;
            }
            if self.resolved.style == NumberStyle::Percent {
                x *= 100.0;
            }
            let raw = match (
                self.resolved.minimum_significant_digits,
                self.resolved.maximum_significant_digits,
            ) {
                (Some(min), Some(max)) => to_raw_precision(x, min, max),
                _ => to_raw_fixed(
                    x,
                    self.resolved.minimum_integer_digits,
                    self.resolved.minimum_fraction_digits,
                    self.resolved.maximum_fraction_digits,
                ),
            };
            let remapped = digits::remap_digits(&raw, &self.resolved.numbering_system);
            let localized = remapped.replace('.', &self.symbols.decimal);
            if self.resolved.use_grouping {
                self.apply_grouping(&localized)
            } else {
                localized
            }
        };

        let pattern =
            if negative { &self.negative_pattern } else { &self.positive_pattern };
        let mut result = pattern.replacen("{number}", &n, 1);
        if let Some(currency) = &self.currency_render {
            result = result.replacen("{currency}", currency, 1);
        }
        result
    }

    pub fn resolved_options(&self) -> ResolvedNumberOptions {
        self.resolved.clone()
    }

    /// Inserts group separators into the integer part, counting from the
    /// decimal point: one primary group, then secondary groups.
    fn apply_grouping(&self, localized: &str) -> String {
        let decimal = self.symbols.decimal.as_str();
        let (integer, fraction) = match localized.split_once(decimal) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (localized, None),
        };
        let chars: Vec<char> = integer.chars().collect();
        if chars.len() <= self.primary_group {
            return localized.to_string();
        }

        let end = chars.len() - self.primary_group;
        let mut idx = end % self.secondary_group;
        let mut groups: Vec<String> = Vec::new();
        if idx > 0 {
            groups.push(chars[..idx].iter().collect());
        }
        while idx < end {
            groups.push(chars[idx..idx + self.secondary_group].iter().collect());
            idx += self.secondary_group;
        }
        groups.push(chars[end..].iter().collect());
        let grouped = groups.join(&self.symbols.group);
        match fraction {
            Some(fraction) => format!("{grouped}{decimal}{fraction}"),
            None => grouped,
        }
    }
}

/// Range-checks an optional digit-count option, substituting `fallback`
/// when absent.
fn get_digit_option(
    value: Option<u32>,
    option: &'static str,
    min: u32,
    max: u32,
    fallback: u32,
) -> Result<u32, IntlError> {
    match value {
        Some(value) if value < min || value > max => {
            Err(IntlError::OptionOutOfRange { option, value, min, max })
        }
        Some(value) => Ok(value),
        None => Ok(fallback),
    }
}

/// floor(log10(n)) for finite positive n, compensating for the rounding
/// error of going through the natural log.
fn log10_floor(n: f64) -> i32 {
    let approx = (n.ln() * consts::LOG10_E).round() as i32;
    if 10f64.powi(approx) > n { approx - 1 } else { approx }
}

/// Renders a non-negative finite value with `max_precision` significant
/// digits, trimming trailing fraction zeros down to `min_precision`.
fn to_raw_precision(x: f64, min_precision: u32, max_precision: u32) -> String {
    let p = max_precision as i32;
    let (mut m, e) = if x == 0.0 {
        ("0".repeat(max_precision as usize), 0)
    } else {
        let e = log10_floor(x);
        let scale = f64::from((e - p + 1).abs()) * consts::LN_10;
        let f = scale.exp().round();
        let n = if e - p + 1 < 0 { x * f } else { x / f };
        (format!("{:.0}", n.round()), e)
    };

    if e >= p {
        m.push_str(&"0".repeat((e - p + 1) as usize));
        return m;
    }
    if e == p - 1 {
        return m;
    }
    if e >= 0 {
        m.insert((e + 1) as usize, '.');
    } else {
        let mut padded = String::from("0.");
        padded.push_str(&"0".repeat((-(e + 1)) as usize));
        padded.push_str(&m);
        m = padded;
    }

    if m.contains('.') && max_precision > min_precision {
        let mut cut = max_precision - min_precision;
        while cut > 0 && m.ends_with('0') {
            m.pop();
            cut -= 1;
        }
        if m.ends_with('.') {
            m.pop();
        }
    }
    m
}

/// Renders a non-negative finite value with a fixed fraction-digit range
/// and a minimum integer-digit width.
fn to_raw_fixed(x: f64, min_integer: u32, min_fraction: u32, max_fraction: u32) -> String {
    // Scale and round as an integer so that ties go away from zero, then
    // reinsert the decimal point.
    let f = 10f64.powi(max_fraction as i32);
    let n = (x * f).round();
    let mut m = format!("{n:.0}");
    if max_fraction > 0 {
        if m.len() <= max_fraction as usize {
            let padding = "0".repeat(max_fraction as usize + 1 - m.len());
            m.insert_str(0, &padding);
        }
        m.insert(m.len() - max_fraction as usize, '.');
    }

    let mut cut = max_fraction - min_fraction;
    while cut > 0 && m.ends_with('0') {
        m.pop();
        cut -= 1;
    }
    if m.ends_with('.') {
        m.pop();
    }

    let integer_len = m.find('.').unwrap_or(m.len());
    if integer_len < min_integer as usize {
        let padding = "0".repeat(min_integer as usize - integer_len);
        m.insert_str(0, &padding);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Raw digit rendering
    // ==========================================================================

    #[test]
    fn raw_fixed_rounds_and_trims() {
        assert_eq!(to_raw_fixed(1234.5, 1, 2, 2), "1234.50");
        assert_eq!(to_raw_fixed(0.5, 1, 0, 1), "0.5");
        assert_eq!(to_raw_fixed(1.0, 2, 0, 3), "01");
    }

    #[test]
    fn raw_fixed_rounds_ties_away_from_zero() {
        assert_eq!(to_raw_fixed(2.5, 1, 0, 0), "3");
        assert_eq!(to_raw_fixed(0.25, 1, 0, 1), "0.3");
        assert_eq!(to_raw_fixed(1234.5, 1, 0, 0), "1235");
    }

    #[test]
    fn raw_fixed_keeps_minimum_fraction() {
        assert_eq!(to_raw_fixed(3.0, 1, 2, 4), "3.00");
    }

    #[test]
    fn raw_precision_zero() {
        assert_eq!(to_raw_precision(0.0, 1, 3), "0");
        assert_eq!(to_raw_precision(0.0, 3, 3), "0.00");
    }

    #[test]
    fn raw_precision_inserts_point() {
        assert_eq!(to_raw_precision(123.45, 1, 4), "123.5");
        assert_eq!(to_raw_precision(123.45, 1, 2), "120");
        assert_eq!(to_raw_precision(0.00123, 1, 2), "0.0012");
    }

    #[test]
    fn raw_precision_trims_to_minimum() {
        assert_eq!(to_raw_precision(1.5, 1, 5), "1.5");
        assert_eq!(to_raw_precision(1.5, 3, 5), "1.50");
    }

    #[test]
    fn log10_floor_boundaries() {
        assert_eq!(log10_floor(1.0), 0);
        assert_eq!(log10_floor(9.999), 0);
        assert_eq!(log10_floor(10.0), 1);
        assert_eq!(log10_floor(0.1), -1);
        assert_eq!(log10_floor(1000.0), 3);
    }

    // ==========================================================================
    // Currency minor units
    // ==========================================================================

    #[test]
    fn minor_units_lookup() {
        assert_eq!(currency_digits("JPY"), 0);
        assert_eq!(currency_digits("BHD"), 3);
        assert_eq!(currency_digits("USD"), 2);
        assert_eq!(currency_digits("EUR"), 2);
    }

    #[test]
    fn digit_option_bounds() {
        assert_eq!(get_digit_option(None, "x", 1, 21, 5), Ok(5));
        assert_eq!(get_digit_option(Some(21), "x", 1, 21, 1), Ok(21));
        assert!(matches!(
            get_digit_option(Some(22), "x", 1, 21, 1),
            Err(IntlError::OptionOutOfRange { value: 22, .. })
        ));
    }
}
