//! Decimal digit glyph tables for the supported numbering systems.

/// Zero through nine for each supported positional numbering system.
static DIGIT_TABLES: &[(&str, [char; 10])] = &[
    ("arab", ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩']),
    ("arabext", ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹']),
    ("bali", ['᭐', '᭑', '᭒', '᭓', '᭔', '᭕', '᭖', '᭗', '᭘', '᭙']),
    ("beng", ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯']),
    ("deva", ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९']),
    ("fullwide", ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９']),
    ("gujr", ['૦', '૧', '૨', '૩', '૪', '૫', '૬', '૭', '૮', '૯']),
    ("guru", ['੦', '੧', '੨', '੩', '੪', '੫', '੬', '੭', '੮', '੯']),
    ("hanidec", ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九']),
    ("khmr", ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩']),
    ("knda", ['೦', '೧', '೨', '೩', '೪', '೫', '೬', '೭', '೮', '೯']),
    ("laoo", ['໐', '໑', '໒', '໓', '໔', '໕', '໖', '໗', '໘', '໙']),
    ("latn", ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']),
    ("limb", ['᥆', '᥇', '᥈', '᥉', '᥊', '᥋', '᥌', '᥍', '᥎', '᥏']),
    ("mlym", ['൦', '൧', '൨', '൩', '൪', '൫', '൬', '൭', '൮', '൯']),
    ("mong", ['᠐', '᠑', '᠒', '᠓', '᠔', '᠕', '᠖', '᠗', '᠘', '᠙']),
    ("mymr", ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉']),
    ("orya", ['୦', '୧', '୨', '୩', '୪', '୫', '୬', '୭', '୮', '୯']),
    ("tamldec", ['௦', '௧', '௨', '௩', '௪', '௫', '௬', '௭', '௮', '௯']),
    ("telu", ['౦', '౧', '౨', '౩', '౪', '౫', '౬', '౭', '౮', '౯']),
    ("thai", ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙']),
    ("tibt", ['༠', '༡', '༢', '༣', '༤', '༥', '༦', '༧', '༨', '༩']),
];

/// Digit glyphs for a numbering system, if it is a supported positional
/// system.
pub(crate) fn digits_for(system: &str) -> Option<&'static [char; 10]> {
    DIGIT_TABLES
        .iter()
        .find(|(name, _)| *name == system)
        .map(|(_, digits)| digits)
}

/// Replaces ASCII digits with the system's glyphs; every other character
/// passes through unchanged. Unknown systems render ASCII digits as-is.
pub(crate) fn remap_digits(text: &str, system: &str) -> String {
    match digits_for(system) {
        Some(digits) if system != "latn" => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => digits[d as usize],
                _ => c,
            })
            .collect(),
        _ => text.to_string(),
    }
}
