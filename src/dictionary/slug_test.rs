use super::*;

#[test]
fn test_slugify_strips_polish_diacritics() {
    assert_eq!(slugify("Język angielski"), "jezyk-angielski");
    assert_eq!(slugify("Podręcznik"), "podrecznik");
    assert_eq!(slugify("Książka"), "ksiazka");
}

#[test]
fn test_slugify_is_case_and_diacritic_insensitive() {
    assert_eq!(slugify("ŁOŚ"), "los");
    assert_eq!(slugify("łoś"), slugify("LOS"));
}

#[test]
fn test_slugify_removes_punctuation_and_collapses_separators() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("  one  -- two\tthree "), "one-two-three");
    assert_eq!(slugify("--Foo__ bar--"), "foo__-bar");
}

#[test]
fn test_slugify_keeps_digits() {
    assert_eq!(slugify("Klasa 2 B"), "klasa-2-b");
}

#[test]
fn test_slugify_transliterates_non_decomposable_letters() {
    assert_eq!(slugify("Straße"), "strasse");
    assert_eq!(slugify("Øresund"), "oresund");
    assert_eq!(slugify("Æther"), "aether");
}

#[test]
fn test_slugify_romanizes_cyrillic_and_greek() {
    assert_eq!(slugify("Кот"), "kot");
    assert_eq!(slugify("Русский"), "russkii");
    assert_eq!(slugify("Γάτα"), "gata");
    assert!(!slugify("Ελληνικά").is_empty());
    assert!(!slugify("Українська").is_empty());
}

#[test]
fn test_slugify_romanizes_cjk() {
    let slug = slugify("日本語");
    assert!(!slug.is_empty());
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
}

#[test]
fn test_slugify_without_usable_characters_is_empty() {
    assert_eq!(slugify("???"), "");
    assert_eq!(slugify(" -- "), "");
}
