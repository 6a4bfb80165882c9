use regex::Regex;
use std::sync::LazyLock;

/// Header conventions, in priority order. Group 1 is the candidate title.
///
/// Markers (`TEMPLATE`, `FORM`, `DOCUMENT`) match in any case, but the title
/// phrase must be written in real capitals: collections render their
/// headers that way and body prose almost never is.
static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "TEMPLATE 3 - CONSENT FOR TREATMENT", "2) CLIENT INTAKE FORM"
        r"^(?:(?i:TEMPLATE|FORM|DOCUMENT))?\s*[\d.)]*\s*[-:]?\s*([A-Z][A-Z\s&,()\-]+)(?:\s*(?i:TEMPLATE|FORM))?$",
        // "12. AFTERCARE ADVICE"
        r"^\d+[.)]\s*([A-Z][A-Z\s&,()\-]+?)(?:\s*(?i:TEMPLATE|FORM))?$",
        // bare caps line of at least 10 characters
        r"^([A-Z][A-Z\s&,()\-]{9,})$",
        // "Template: Anything goes here"
        r"^(?i:TEMPLATE|FORM):\s*(.+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static STRUCTURAL_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:page|\d+|section|part)$").unwrap());

/// Decide whether a trimmed, non-empty line is a section header.
///
/// Returns the candidate raw title (trimmed). A pattern whose capture is
/// rejected by [`is_accepted_title`] does not end detection; the next
/// pattern is tried on the same line.
pub fn detect_header(line: &str, min_title_chars: usize) -> Option<&str> {
    HEADER_PATTERNS.iter().find_map(|re| {
        let title = re.captures(line)?.get(1)?.as_str().trim();
        is_accepted_title(title, min_title_chars).then_some(title)
    })
}

/// A candidate title is accepted if it is long enough and not a purely
/// structural word (page, a bare number, section, part).
pub fn is_accepted_title(title: &str, min_title_chars: usize) -> bool {
    title.chars().count() >= min_title_chars && !STRUCTURAL_TITLE.is_match(title)
}
