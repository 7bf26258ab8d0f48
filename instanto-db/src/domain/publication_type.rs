use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::validate_required_text;

/// Kind of publication: journal article, book chapter, thesis, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PublicationType {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PublicationType {
    pub const TABLE: &'static str = "publication_type";
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
pub struct PublicationTypeInput {
    pub name: String,
}

impl PublicationTypeInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)
    }
}
