use crate::model::{Category, ClassifiedSegment, Segment};
use crate::rules::schema::KeywordTable;

/// Classify a template by keyword membership.
///
/// Rules are tried in table order and the first category with any keyword
/// contained in the lowercased title or the lowercased content wins. A body
/// that mentions several categories therefore lands in the earliest one.
/// Falls back to [`Category::Document`].
pub fn classify(title: &str, content: &str, table: &KeywordTable) -> Category {
    let title_lower = title.to_lowercase();
    let content_lower = content.to_lowercase();

    table
        .rules
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|keyword| {
                title_lower.contains(keyword.as_str()) || content_lower.contains(keyword.as_str())
            })
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::Document)
}

/// Attach a category to a finalized segment.
pub fn classify_segment(segment: Segment, table: &KeywordTable) -> ClassifiedSegment {
    let category = classify(&segment.title, &segment.content, table);
    ClassifiedSegment { segment, category }
}
