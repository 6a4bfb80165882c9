use crate::model::Category;
use serde::{Deserialize, Serialize};

/// An ordered keyword table used to classify templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Evaluated in declaration order; the first rule with a hit wins.
    pub rules: Vec<KeywordRule>,
}

/// Keywords that select one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    /// Lowercase substrings matched against the lowercased title and content.
    pub keywords: Vec<String>,
}
