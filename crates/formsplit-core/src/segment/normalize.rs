use regex::Regex;
use std::sync::LazyLock;

static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:TEMPLATE|FORM|DOCUMENT)[\s\d.):\-]*").unwrap());

static TRAILING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:TEMPLATE|FORM|DOCUMENT)$").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Casing restored after title-casing, matched as whole words.
static ABBREVIATIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [("Gdpr", "GDPR"), ("Uk", "UK"), ("Diy", "DIY")]
        .iter()
        .map(|(from, to)| (Regex::new(&format!(r"\b{from}\b")).unwrap(), *to))
        .collect()
});

static SLUG_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SLUG_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Normalize a raw header into a display title.
///
/// Steps:
/// 1. Strip a leading TEMPLATE/FORM/DOCUMENT marker and the enumerator after it
/// 2. Strip the same markers as a trailing word
/// 3. Collapse whitespace
/// 4. Title-case
/// 5. Restore known abbreviations (GDPR, UK, DIY)
pub fn clean_title(raw: &str) -> String {
    let s = LEADING_MARKER.replace(raw, "");
    let s = TRAILING_MARKER.replace(&s, "");
    let s = WHITESPACE_RUN.replace_all(&s, " ");
    let mut title = title_case(s.trim());

    for (re, replacement) in ABBREVIATIONS.iter() {
        title = re.replace_all(&title, *replacement).into_owned();
    }

    title
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts at any letter not directly preceded by another cased
/// letter, so "POST-TREATMENT" becomes "Post-Treatment" and "1ST" "1St".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }

    out
}

/// Derive a URL-safe slug from a display title.
///
/// Pure function of the title: identical titles always give identical slugs.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = SLUG_STRIP.replace_all(&lower, "");
    let dashed = SLUG_SEPARATORS.replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(clean_title("CONSENT FOR TREATMENT"), "Consent For Treatment");
    }

    #[test]
    fn test_trailing_marker_and_abbreviation() {
        assert_eq!(
            clean_title("GDPR COMPLIANCE POLICY TEMPLATE"),
            "GDPR Compliance Policy"
        );
    }

    #[test]
    fn test_leading_marker_with_enumerator() {
        assert_eq!(clean_title("TEMPLATE 4) - CLIENT INTAKE"), "Client Intake");
        assert_eq!(clean_title("Form: photo release"), "Photo Release");
    }

    #[test]
    fn test_trailing_marker_is_whole_word_only() {
        assert_eq!(clean_title("UNIFORM"), "Uniform");
        assert_eq!(clean_title("CONSENT FORM"), "Consent");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_title("  SKIN   TYPE\tGUIDE "), "Skin Type Guide");
    }

    #[test]
    fn test_abbreviations_whole_word() {
        assert_eq!(clean_title("UK DIY KIT RULES"), "UK DIY Kit Rules");
        // "Ukulele" must not become "UKulele".
        assert_eq!(clean_title("UKULELE LESSON"), "Ukulele Lesson");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("POST-TREATMENT CARE"), "Post-Treatment Care");
        assert_eq!(title_case("TERMS & CONDITIONS (UK)"), "Terms & Conditions (Uk)");
        assert_eq!(title_case("client's notes"), "Client'S Notes");
        assert_eq!(title_case("1ST VISIT"), "1St Visit");
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Consent For Treatment"), "consent-for-treatment");
    }

    #[test]
    fn test_slugify_punctuation_and_runs() {
        assert_eq!(slugify("Terms & Conditions (UK)"), "terms-conditions-uk");
        assert_eq!(slugify("Post-Treatment -- Care"), "post-treatment-care");
        assert_eq!(slugify("  - Edge Dashes -  "), "edge-dashes");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        // Underscore is a word character.
        assert_eq!(slugify("Step_1 Guide 2"), "step_1-guide-2");
    }

    #[test]
    fn test_slugify_is_pure() {
        let title = clean_title("TEMPLATE 1. GDPR DATA CONSENT");
        assert_eq!(slugify(&title), slugify(&title));
        assert_eq!(slugify(&title), "gdpr-data-consent");
    }

    #[test]
    fn test_slug_shape() {
        for title in ["A -- B", "Ünïcode Títle", "x!!y", "--", "Model (V2) & Co."] {
            let slug = slugify(title);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert_eq!(slug, slug.to_lowercase());
        }
    }
}
