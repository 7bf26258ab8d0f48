use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_is_number, validate_optional_text, validate_required_text};

/// A thesis or project written by a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StudentWork {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub school: String,
    pub volume: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub student_work_type: i64,
    pub author: i64,
}

impl StudentWork {
    pub const TABLE: &'static str = "student_work";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "year",
        "school",
        "volume",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "student_work_type",
        "author",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWorkInput {
    pub title: String,
    pub year: i64,
    pub school: String,
    pub volume: String,
    pub student_work_type: i64,
    /// Member who wrote it.
    pub author: i64,
}

impl StudentWorkInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("title", &self.title)?;
        validate_is_number("year", self.year)?;
        validate_optional_text("school", &self.school)?;
        validate_optional_text("volume", &self.volume)
    }
}
