// Slug generation for subject and dictionary titles
//
// Titles are transliterated to ASCII so lookups ignore diacritics and case:
// "ŁOŚ" and "los" share the slug "los". Non-Latin scripts are romanized.

use std::sync::OnceLock;

use regex::Regex;

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s-]").expect("valid slug regex"))
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-\s]+").expect("valid separator regex"))
}

/// Transliterate text of any script to ASCII ("Русский" -> "Russkii").
pub fn to_ascii(text: &str) -> String {
    deunicode::deunicode(text)
}

/// Convert a title to a URL slug.
///
/// Lowercases, strips everything except ASCII letters, digits, underscores,
/// whitespace and hyphens, then collapses whitespace/hyphen runs into a single
/// hyphen. Leading and trailing hyphens and underscores are removed.
pub fn slugify(title: &str) -> String {
    let ascii = to_ascii(title).to_lowercase();
    let cleaned = disallowed_chars().replace_all(&ascii, "");
    let hyphenated = separators().replace_all(cleaned.trim(), "-");
    hyphenated.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
