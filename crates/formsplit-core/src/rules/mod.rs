pub mod builtin;
pub mod schema;

use crate::error::FormsplitError;
use crate::model::Category;
use schema::KeywordTable;
use std::collections::HashSet;

/// Parse and validate a keyword table from a JSON string.
pub fn parse_table_str(json: &str) -> Result<KeywordTable, FormsplitError> {
    let table: KeywordTable = serde_json::from_str(json).map_err(FormsplitError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a keyword table is well-formed.
pub fn validate_table(table: &KeywordTable) -> Result<(), FormsplitError> {
    if table.rules.is_empty() {
        return Err(FormsplitError::KeywordTableInvalid(
            "rules must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for rule in &table.rules {
        if rule.category == Category::Document {
            return Err(FormsplitError::KeywordTableInvalid(
                "'document' is the fallback category and cannot have keywords".into(),
            ));
        }

        if !seen.insert(rule.category) {
            return Err(FormsplitError::KeywordTableInvalid(format!(
                "category '{}' appears more than once",
                rule.category
            )));
        }

        if rule.keywords.is_empty() {
            return Err(FormsplitError::KeywordTableInvalid(format!(
                "category '{}' has no keywords",
                rule.category
            )));
        }

        for keyword in &rule.keywords {
            if keyword.trim().is_empty() {
                return Err(FormsplitError::KeywordTableInvalid(format!(
                    "category '{}' has an empty keyword",
                    rule.category
                )));
            }
            if *keyword != keyword.to_lowercase() {
                return Err(FormsplitError::KeywordTableInvalid(format!(
                    "keyword '{}' in category '{}' must be lowercase",
                    keyword, rule.category
                )));
            }
        }
    }

    Ok(())
}
