//! BCP 47 language tag validation and canonicalization.
//!
//! Tags are processed with ASCII case-insensitive comparisons throughout.
//! [`is_structurally_valid`] checks the tag against the BCP 47 ABNF grammar
//! (RFC 5646 section 2.1) and rejects duplicate variant and singleton
//! subtags; [`canonicalize`] regularizes case, orders extension sequences,
//! and resolves registered aliases. Both are pure functions; callers
//! validate before canonicalizing.

mod aliases;

/// Returns true when `tag` can be generated from the `Language-Tag`
/// production of the BCP 47 grammar and contains no duplicate variant or
/// singleton subtags (duplicates inside a private-use partition are
/// permitted).
pub fn is_structurally_valid(tag: &str) -> bool {
    if tag.is_empty() || !tag.is_ascii() {
        return false;
    }
    let lower = tag.to_ascii_lowercase();
    if is_grandfathered(&lower) {
        return true;
    }

    let subtags: Vec<&str> = lower.split('-').collect();
    if subtags[0] == "x" {
        return parse_private_use(&subtags, 0) == Some(subtags.len());
    }
    parse_langtag(&subtags)
}

/// Returns the canonical, case-regularized form of `tag`, which must be
/// structurally valid. Canonicalization is idempotent.
///
/// Case rules: all subtags lowercase, except 2-letter subtags (uppercase)
/// and 4-letter subtags (titlecase) that neither start the tag nor follow a
/// singleton. Multiple extension sequences are sorted into ASCII order by
/// their singleton key, and redundant or grandfathered tags and subtags are
/// replaced by their preferred values.
pub fn canonicalize(tag: &str) -> String {
    let mut parts: Vec<String> = tag
        .to_ascii_lowercase()
        .split('-')
        .map(str::to_string)
        .collect();

    // Case regularization stops at the first singleton: subtags inside
    // extension and private-use sequences stay lowercase.
    for part in parts.iter_mut().skip(1) {
        if part.len() == 2 {
            part.make_ascii_uppercase();
        } else if part.len() == 4 {
            *part = titlecase(part);
        } else if part.len() == 1 {
            break;
        }
    }

    let parts = sort_extension_sequences(parts);
    let mut joined = parts.join("-");

    if let Some(preferred) = aliases::redundant_tag(&joined) {
        joined = preferred.to_string();
    }

    let mut parts: Vec<String> = joined.split('-').map(str::to_string).collect();
    let mut i = 1;
    while i < parts.len() {
        if let Some(replacement) = aliases::subtag_replacement(&parts[i]) {
            parts[i] = replacement.to_string();
        } else if let Some(prefix) = aliases::extlang_prefix(&parts[i]) {
            // The preferred value of every extlang is the extlang itself;
            // drop the primary language when it matches the designated
            // prefix, continuing the scan past the promoted subtag.
            if i == 1 && prefix == parts[0] {
                parts.remove(0);
                i = 2;
                continue;
            }
        }
        i += 1;
    }

    parts.join("-")
}

fn is_grandfathered(lower: &str) -> bool {
    aliases::IRREGULAR
        .iter()
        .chain(aliases::REGULAR)
        .any(|t| t.eq_ignore_ascii_case(lower))
}

fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_alnum(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// variant = 5*8alphanum / (DIGIT 3alphanum)
fn is_variant(s: &str) -> bool {
    match s.len() {
        5..=8 => is_alnum(s),
        4 => s.as_bytes()[0].is_ascii_digit() && is_alnum(s),
        _ => false,
    }
}

/// Consumes `x 1*("-" 1*8alphanum)` starting at `start`; returns the index
/// past the end on success.
fn parse_private_use(subtags: &[&str], start: usize) -> Option<usize> {
    debug_assert_eq!(subtags[start], "x");
    let mut i = start + 1;
    let mut consumed = 0;
    while i < subtags.len() && (1..=8).contains(&subtags[i].len()) && is_alnum(subtags[i]) {
        i += 1;
        consumed += 1;
    }
    (consumed > 0).then_some(i)
}

/// Walks the langtag production over lowercased subtags, rejecting
/// duplicate variants and duplicate extension singletons along the way.
fn parse_langtag(subtags: &[&str]) -> bool {
    let len = subtags.len();
    let mut i;

    // language = 2*3ALPHA ["-" extlang] / 4ALPHA / 5*8ALPHA
    match subtags[0].len() {
        2..=3 if is_alpha(subtags[0]) => {
            i = 1;
            // extlang = 3ALPHA *2("-" 3ALPHA)
            let mut extlangs = 0;
            while i < len && extlangs < 3 && subtags[i].len() == 3 && is_alpha(subtags[i]) {
                i += 1;
                extlangs += 1;
            }
        }
        4..=8 if is_alpha(subtags[0]) => i = 1,
        _ => return false,
    }

    // script = 4ALPHA
    if i < len && subtags[i].len() == 4 && is_alpha(subtags[i]) {
        i += 1;
    }

    // region = 2ALPHA / 3DIGIT
    if i < len
        && ((subtags[i].len() == 2 && is_alpha(subtags[i]))
            || (subtags[i].len() == 3 && is_digits(subtags[i])))
    {
        i += 1;
    }

    let mut variants: Vec<&str> = Vec::new();
    while i < len && is_variant(subtags[i]) {
        if variants.contains(&subtags[i]) {
            return false;
        }
        variants.push(subtags[i]);
        i += 1;
    }

    // extension = singleton 1*("-" 2*8alphanum); singleton excludes "x"
    let mut singletons: Vec<&str> = Vec::new();
    while i < len && subtags[i].len() == 1 && subtags[i] != "x" && is_alnum(subtags[i]) {
        if singletons.contains(&subtags[i]) {
            return false;
        }
        singletons.push(subtags[i]);
        i += 1;

        let mut consumed = 0;
        while i < len && (2..=8).contains(&subtags[i].len()) && is_alnum(subtags[i]) {
            i += 1;
            consumed += 1;
        }
        if consumed == 0 {
            return false;
        }
    }

    if i < len && subtags[i] == "x" {
        match parse_private_use(subtags, i) {
            Some(end) => i = end,
            None => return false,
        }
    }

    i == len
}

fn titlecase(s: &str) -> String {
    let (head, rest) = s.split_at(1);
    format!("{}{rest}", head.to_ascii_uppercase())
}

/// Sorts consecutive extension sequences into ASCII order by singleton,
/// leaving everything before the first singleton and the private-use
/// partition in place.
fn sort_extension_sequences(parts: Vec<String>) -> Vec<String> {
    let Some(first) = parts
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, p)| p.len() == 1 && *p != "x")
        .map(|(i, _)| i)
    else {
        return parts;
    };

    let mut result: Vec<String> = parts[..first].to_vec();
    let mut sequences: Vec<Vec<String>> = Vec::new();
    let mut private_use: Vec<String> = Vec::new();

    for (i, part) in parts.iter().enumerate().skip(first) {
        if part == "x" {
            private_use = parts[i..].to_vec();
            break;
        }
        if part.len() == 1 {
            sequences.push(vec![part.clone()]);
        } else if let Some(seq) = sequences.last_mut() {
            seq.push(part.clone());
        }
    }

    sequences.sort();
    for seq in sequences {
        result.extend(seq);
    }
    result.extend(private_use);
    result
}
