use crate::error::FormsplitError;
use crate::rules::parse_table_str;
use crate::rules::schema::KeywordTable;

const CATEGORIES_JSON: &str = include_str!("../../../../rules/categories.json");

/// Load the built-in category keyword table.
pub fn load_default() -> Result<KeywordTable, FormsplitError> {
    parse_table_str(CATEGORIES_JSON)
}
