use std::sync::LazyLock;

use regex::Regex;

pub const NO_DESCRIPTION: &str = "No description.";

static HP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^hp$").unwrap());
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)special").unwrap());
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|[\n\r\x0C\x0B\u{85}\u{2028}\u{2029}]").unwrap());

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `special-attack` -> `Sp. Attack`, `hp` -> `HP`, `speed` -> `Speed`.
///
/// Words are capitalized first; the `HP` and `Sp.` fixups run on the joined result.
pub fn humanize_stat_name(identifier: &str) -> String {
    let words = identifier.split('-').map(capitalize).collect::<Vec<_>>().join(" ");
    let words = HP.replace(&words, "HP");
    SPECIAL.replace(&words, "Sp.").into_owned()
}

/// Replace every line-break variant with a single space, falling back to
/// `NO_DESCRIPTION` when there is no text at all.
pub fn clean_flavor_text(raw: Option<&str>) -> String {
    match raw {
        Some(text) if !text.is_empty() => LINE_BREAK.replace_all(text, " ").into_owned(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Normalize a display name into slug form: `Mr. Mime` -> `mr-mime`,
/// `Nidoran ♀` -> `nidoran-f`, `Farfetch'd` -> `farfetchd`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let push_sep = |slug: &mut String| {
        if !slug.is_empty() && !slug.ends_with('-') { slug.push('-') }
    };

    for c in name.chars() {
        match c {
            '\'' | '’' | '.' => {}
            '♀' => { push_sep(&mut slug); slug.push('f') }
            '♂' => { push_sep(&mut slug); slug.push('m') }
            'é' | 'É' => slug.push('e'),
            c if c.is_alphanumeric() => slug.extend(c.to_lowercase()),
            _ => push_sep(&mut slug),
        }
    }

    while slug.ends_with('-') { slug.pop(); }
    slug
}
