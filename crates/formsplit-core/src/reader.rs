use crate::error::FormsplitError;
use crate::model::Category;
use crate::segment::normalize::slugify;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Emitted files with a shorter body are not worth importing.
pub const MIN_BODY_CHARS: usize = 50;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

/// A template file read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub title: String,
    pub category: Category,
    pub slug: String,
    pub source: Option<String>,
    pub body: String,
    /// Distinct `{{name}}` placeholders, in order of first appearance.
    pub variables: Vec<String>,
}

/// Parse a template file written by the emitter.
///
/// Metadata lines are read until the first `---` line; everything after it
/// is the body. A missing slug is derived from the title and a missing or
/// unknown type falls back to `document`.
pub fn parse_template(text: &str) -> Result<ParsedTemplate, FormsplitError> {
    let mut title = None;
    let mut category = None;
    let mut slug = None;
    let mut source = None;
    let mut body_start = None;

    let lines: Vec<&str> = text.lines().collect();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("# ") {
            title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("**Type:**") {
            category = Category::from_tag(rest);
        } else if let Some(rest) = line.strip_prefix("**Slug:**") {
            slug = Some(rest.trim().to_string()).filter(|s| !s.is_empty());
        } else if let Some(rest) = line.strip_prefix("**Source:**") {
            source = Some(rest.trim().to_string()).filter(|s| !s.is_empty());
        } else if line == "---" {
            body_start = Some(i + 1);
            break;
        }
    }

    let title = title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| FormsplitError::TemplateParse("missing '# ' title line".into()))?;

    let body = lines[body_start.unwrap_or(lines.len())..]
        .join("\n")
        .trim()
        .to_string();
    let body_chars = body.chars().count();
    if body_chars < MIN_BODY_CHARS {
        return Err(FormsplitError::TemplateParse(format!(
            "template '{}' has only {} characters of content (minimum {})",
            title, body_chars, MIN_BODY_CHARS
        )));
    }

    let slug = slug.unwrap_or_else(|| slugify(&title));
    let variables = extract_variables(&body);

    Ok(ParsedTemplate {
        title,
        category: category.unwrap_or(Category::Document),
        slug,
        source,
        body,
        variables,
    })
}

/// List the distinct `{{name}}` placeholders in a template body.
pub fn extract_variables(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    VARIABLE
        .captures_iter(body)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}
