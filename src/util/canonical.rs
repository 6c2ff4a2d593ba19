use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("slug whitespace regex must compile"));
static OUTSIDE_SLUG_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("slug class regex must compile"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("slug hyphen regex must compile"));
static SLUG_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug validator regex must compile"));

/// Convert a free-text geographic name into a URL path segment.
///
/// Normalization steps, in order:
/// - lowercase (locale independent)
/// - canonical decomposition (NFD)
/// - drop combining marks
/// - replace whitespace runs with a single hyphen (`-`)
/// - remove anything outside `[a-z0-9-]`
/// - collapse hyphen runs
/// - trim leading/trailing hyphens
///
/// Never fails. A name with nothing retainable yields `""`, which callers
/// must treat as unrepresentable.
pub fn normalize(name: impl AsRef<str>) -> String {
    let lowercase = name.as_ref().to_lowercase();
    let stripped: String = lowercase.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let filtered = OUTSIDE_SLUG_CLASS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&filtered, "-");
    collapsed.trim_matches('-').to_string()
}

/// Generic display fallback for a slug: hyphens become spaces and every
/// whitespace-delimited word is capitalized.
pub fn title_case(slug: impl AsRef<str>) -> String {
    let spaced = slug.as_ref().replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for ch in spaced.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            word_start = true;
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Boundary check for externally supplied path segments: non-empty and made
/// only of `[a-z0-9-]`. Hyphen placement is not checked here.
pub fn is_valid_slug(candidate: impl AsRef<str>) -> bool {
    SLUG_CLASS.is_match(candidate.as_ref())
}

/// Full slug shape: valid class, no leading, trailing or doubled hyphen.
pub fn is_canonical_slug(candidate: impl AsRef<str>) -> bool {
    let value = candidate.as_ref();
    is_valid_slug(value)
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_never_grows_and_stays_in_class(input in "\\PC{0,40}") {
            let slug = normalize(&input);
            prop_assert!(slug.len() <= input.len());
            prop_assert!(slug.is_empty() || is_canonical_slug(&slug));
        }

        #[test]
        fn validator_accepts_exactly_the_slug_class(candidate in "\\PC{0,12}") {
            let expected = !candidate.is_empty()
                && candidate.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
            prop_assert_eq!(is_valid_slug(&candidate), expected);
        }

        #[test]
        fn title_case_of_slug_is_never_empty(slug in "[a-z0-9-]{1,20}") {
            prop_assert!(!title_case(&slug).is_empty());
            prop_assert_eq!(normalize(title_case(&slug)), normalize(&slug));
        }
    }

    #[test]
    fn normalize_strips_diacritics_and_apostrophes() {
        assert_eq!(normalize(" Côte d'Ivoire "), "cote-divoire");
        assert_eq!(normalize("São Paulo"), "sao-paulo");
        assert_eq!(normalize("Zürich"), "zurich");
    }

    #[test]
    fn normalize_collapses_runs() {
        let slug = normalize("  multiple   spaces--and--dashes  ");
        assert_eq!(slug, "multiple-spaces-and-dashes");
        assert!(is_canonical_slug(&slug));
    }

    #[test]
    fn normalize_mixed_separators_become_one_hyphen() {
        assert_eq!(normalize("Guinea -\t Bissau"), "guinea-bissau");
        assert_eq!(normalize("Washington, D.C."), "washington-dc");
    }

    #[test]
    fn normalize_degenerate_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("'!?\u{0301}"), "");
        assert_eq!(normalize("- -"), "");
    }

    #[test]
    fn normalize_drops_letters_without_decomposition() {
        // Stroke letters have no NFD form, so they are removed, not transliterated.
        assert_eq!(normalize("Łódź"), "odz");
    }

    #[test]
    fn normalize_is_identity_on_slugs() {
        for slug in ["new-york", "a", "123", "rio-de-janeiro", "x-1-y"] {
            assert_eq!(normalize(slug), slug);
        }
    }

    #[test]
    fn normalize_output_is_valid_and_never_longer() {
        let inputs = [
            "New York",
            "  Saint-Étienne ",
            "İstanbul",
            "Ho Chi Minh City",
            "St. John's",
            "Ñuñoa",
            "Åland Islands",
            "-- Tel Aviv-Yafo --",
        ];
        for input in inputs {
            let slug = normalize(input);
            assert!(!slug.is_empty(), "{input} produced an empty slug");
            assert!(is_valid_slug(&slug), "{slug} is not a valid slug");
            assert!(is_canonical_slug(&slug), "{slug} is not canonical");
            assert!(slug.chars().count() <= input.chars().count());
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("cote-divoire"), "Cote Divoire");
        assert_eq!(title_case("new-york"), "New York");
        assert_eq!(title_case("trinidad-and-tobago"), "Trinidad And Tobago");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_keeps_separator_count() {
        assert_eq!(title_case("a--b"), "A  B");
        assert_eq!(title_case("-lead"), " Lead");
    }

    #[test]
    fn is_valid_slug_checks_character_class_only() {
        assert!(is_valid_slug("new-york"));
        assert!(!is_valid_slug("New York"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("são-paulo"));
        assert!(!is_valid_slug("../etc"));
        assert!(is_valid_slug("-odd--but-allowed-"));
        assert!(!is_canonical_slug("-odd--but-allowed-"));
    }
}
