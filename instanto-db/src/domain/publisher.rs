use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::validate_required_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Publisher {
    pub const TABLE: &'static str = "publisher";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherInput {
    pub name: String,
}

impl PublisherInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)
    }
}
