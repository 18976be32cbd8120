//! Locale negotiation.
//!
//! Matches a caller's requested locale list against the registry's
//! available data using prefix-truncation lookup, then resolves the
//! unicode extension keys ("nu", "ca") each formatting engine cares
//! about. The best-fit matcher is intentionally the same algorithm as
//! lookup; the distinction is kept in the API surface only.

use crate::error::IntlError;
use crate::registry::{FormatterKind, LocaleRegistry};
use crate::tag;

/// Locale matching algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocaleMatcher {
    Lookup,
    #[default]
    BestFit,
}

impl LocaleMatcher {
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleMatcher::Lookup => "lookup",
            LocaleMatcher::BestFit => "best fit",
        }
    }
}

/// Outcome of locale resolution for one formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// Negotiated tag, including any supported unicode extension.
    pub locale: String,
    /// Registry key the formatter loads its data from.
    pub data_locale: String,
    /// Resolved "nu" extension value.
    pub numbering_system: String,
    /// Resolved "ca" extension value; set for date/time resolution only.
    pub calendar: Option<String>,
}

/// Validates and canonicalizes a requested locale list, dropping
/// duplicates while preserving first-occurrence order.
pub fn canonicalize_locale_list<S: AsRef<str>>(locales: &[S]) -> Result<Vec<String>, IntlError> {
    let mut seen = Vec::new();
    for locale in locales {
        let locale = locale.as_ref();
        if !tag::is_structurally_valid(locale) {
            return Err(IntlError::InvalidLanguageTag { tag: locale.to_string() });
        }
        let canonical = tag::canonicalize(locale);
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    Ok(seen)
}

/// Finds the longest prefix of `locale` that is available, truncating one
/// subtag at a time. A single-letter subtag left dangling at the end of a
/// truncation is removed together with the subtag after it, so "en-x-priv"
/// falls back to "en" rather than "en-x".
pub fn best_available_locale(available: &[String], locale: &str) -> Option<String> {
    let mut candidate = locale.to_string();
    loop {
        if available.iter().any(|avail| *avail == candidate) {
            return Some(candidate);
        }
        let mut pos = candidate.rfind('-')?;
        if pos >= 2 && candidate.as_bytes()[pos - 2] == b'-' {
            pos -= 2;
        }
        candidate.truncate(pos);
    }
}

/// Extracts the unicode ("-u-") extension sequence from a canonical tag,
/// returning the byte offset of its leading '-' and the sequence itself
/// (e.g. `"-u-nu-thai"`). Extensions inside a private-use tail are not
/// extensions.
pub(crate) fn unicode_extension(locale: &str) -> Option<(usize, String)> {
    let mut offset = 0;
    let mut subtags = locale.split('-').peekable();
    // Skip the primary language subtag.
    offset += subtags.next()?.len();
    while let Some(subtag) = subtags.next() {
        let start = offset;
        offset += 1 + subtag.len();
        if subtag == "x" {
            return None;
        }
        if subtag != "u" {
            continue;
        }
        let mut end = offset;
        while let Some(next) = subtags.peek() {
            if next.len() == 1 {
                break;
            }
            end += 1 + next.len();
            subtags.next();
        }
        return Some((start, locale[start..end].to_string()));
    }
    None
}

/// Returns `locale` with its unicode extension sequence removed.
pub(crate) fn strip_unicode_extension(locale: &str) -> String {
    match unicode_extension(locale) {
        Some((start, sequence)) => {
            let mut stripped = locale.to_string();
            stripped.replace_range(start..start + sequence.len(), "");
            stripped
        }
        None => locale.to_string(),
    }
}

/// Looks up the value of one key inside an extension sequence such as
/// `"-u-ca-buddhist-nu-thai"`.
fn extension_value(sequence: &str, key: &str) -> Option<String> {
    let mut subtags = sequence.split('-').skip(2).peekable();
    while let Some(subtag) = subtags.next() {
        if subtag != key {
            continue;
        }
        // A key with no value subtag counts as present-but-empty.
        return match subtags.peek() {
            Some(value) if value.len() > 2 => Some((*value).to_string()),
            _ => Some(String::new()),
        };
    }
    None
}

struct LookupResult {
    locale: String,
    extension: Option<(usize, String)>,
}

/// Walks the requested list and returns the first available match plus
/// the unicode extension carried by the request that produced it. Falls
/// back to the registry default when nothing matches.
fn lookup_matcher(
    registry: &LocaleRegistry,
    kind: FormatterKind,
    requested: &[String],
) -> Result<LookupResult, IntlError> {
    let available = registry.available_locales(kind);
    for locale in requested {
        let no_extension = strip_unicode_extension(locale);
        if let Some(found) = best_available_locale(available, &no_extension) {
            return Ok(LookupResult { locale: found, extension: unicode_extension(locale) });
        }
    }
    // The default locale itself may lack data for this engine.
    let default = registry.default_locale().ok_or(IntlError::NoLocaleData)?;
    best_available_locale(available, default)
        .map(|locale| LookupResult { locale, extension: None })
        .ok_or(IntlError::NoLocaleData)
}

/// Negotiates the locale and unicode extension keys for one formatter.
///
/// Priority per key is explicit option, then the request's `-u-`
/// extension value, then the matched locale's data default. Extension
/// values honored from the request are echoed back in the resolved tag.
pub fn resolve_locale(
    registry: &LocaleRegistry,
    kind: FormatterKind,
    requested: &[String],
    matcher: LocaleMatcher,
    numbering_system: Option<&str>,
    calendar: Option<&str>,
) -> Result<ResolvedLocale, IntlError> {
    let matched = match matcher {
        // Best-fit matching is the lookup algorithm under another name.
        LocaleMatcher::Lookup | LocaleMatcher::BestFit => {
            lookup_matcher(registry, kind, requested)?
        }
    };
    let data_locale = matched.locale.clone();

    let keys: &[(&str, Option<&str>)] = match kind {
        FormatterKind::Number => &[("nu", numbering_system)],
        FormatterKind::DateTime => &[("ca", calendar), ("nu", numbering_system)],
    };

    let mut resolved_nu = String::new();
    let mut resolved_ca = None;
    let mut supported_extension = String::from("-u");
    for &(key, option) in keys {
        let supported = registry.extension_values(kind, &data_locale, key);
        let mut value = supported.first().cloned().unwrap_or_default();
        let mut addition = String::new();
        if let Some((_, sequence)) = &matched.extension
            && let Some(requested_value) = extension_value(sequence, key)
            && !requested_value.is_empty()
            && supported.contains(&requested_value)
        {
            addition = format!("-{key}-{requested_value}");
            value = requested_value;
        }
        if let Some(option) = option
            && supported.iter().any(|candidate| candidate == option)
            && option != value
        {
            value = option.to_string();
            addition.clear();
        }
        match key {
            "nu" => resolved_nu = value,
            _ => resolved_ca = Some(value),
        }
        supported_extension.push_str(&addition);
    }

    let mut locale = data_locale.clone();
    if supported_extension.len() > 2 {
        let insert_at = matched
            .extension
            .as_ref()
            .map_or(locale.len(), |(start, _)| (*start).min(locale.len()));
        locale.insert_str(insert_at, &supported_extension);
    }

    Ok(ResolvedLocale {
        locale,
        data_locale,
        numbering_system: resolved_nu,
        calendar: resolved_ca,
    })
}

/// Filters a requested locale list down to the members the registry can
/// serve, preserving request order. The returned tags are the canonical
/// requested tags, extensions included.
pub fn supported_locales_of<S: AsRef<str>>(
    registry: &LocaleRegistry,
    kind: FormatterKind,
    requested: &[S],
    matcher: LocaleMatcher,
) -> Result<Vec<String>, IntlError> {
    let requested = canonicalize_locale_list(requested)?;
    let available = registry.available_locales(kind);
    Ok(match matcher {
        LocaleMatcher::Lookup | LocaleMatcher::BestFit => requested
            .into_iter()
            .filter(|locale| {
                best_available_locale(available, &strip_unicode_extension(locale)).is_some()
            })
            .collect(),
    })
}
