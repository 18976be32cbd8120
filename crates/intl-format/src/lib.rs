pub mod data;
pub mod datetime;
pub mod error;
pub mod matcher;
pub mod number;
pub mod registry;
pub mod tag;

pub use data::{
    CalendarData, ComponentWidth, DateTimeData, DayPeriods, FormatTemplate, NameTable,
    NumberData, NumberPatterns, NumberSymbols, StylePatterns,
};
pub use datetime::{
    DateTimeFormat, DateTimeFormatOptions, FormatMatcher, ResolvedDateTimeOptions,
};
pub use error::IntlError;
pub use matcher::{LocaleMatcher, ResolvedLocale};
pub use number::{
    CurrencyDisplay, NumberFormat, NumberFormatOptions, NumberStyle, ResolvedNumberOptions,
};
pub use registry::{FormatterKind, LocaleRegistry};
