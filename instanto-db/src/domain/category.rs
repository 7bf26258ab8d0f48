use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_length, validate_not_empty};

/// Category names and descriptions are short labels.
pub const MAX_CATEGORY_LEN: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Category {
    pub const TABLE: &'static str = "category";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

impl CategoryInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("name", &self.name)?;
        validate_length("name", &self.name, MAX_CATEGORY_LEN)?;
        validate_length("description", &self.description, MAX_CATEGORY_LEN)
    }
}
