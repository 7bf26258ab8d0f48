use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ResearchLine {
    pub id: i64,
    pub title: String,
    pub finished: bool,
    pub description: String,
    pub logo: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub primary_research_area: i64,
}

impl ResearchLine {
    pub const TABLE: &'static str = "research_line";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "finished",
        "description",
        "logo",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "primary_research_area",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchLineInput {
    pub title: String,
    pub finished: bool,
    pub description: String,
    pub primary_research_area: i64,
}

impl ResearchLineInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("title", &self.title)?;
        validate_optional_text("description", &self.description)
    }
}
