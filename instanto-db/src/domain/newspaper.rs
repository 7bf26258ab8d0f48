use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Newspaper {
    pub id: i64,
    pub name: String,
    pub web: String,
    pub logo: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Newspaper {
    pub const TABLE: &'static str = "newspaper";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "web",
        "logo",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewspaperInput {
    pub name: String,
    pub web: String,
}

impl NewspaperInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)?;
        validate_optional_text("web", &self.web)
    }
}

#[cfg(test)]
mod tests {
    use super::NewspaperInput;

    #[test]
    fn rejects_empty_name() {
        let input = NewspaperInput {
            name: String::new(),
            web: "https://example.org".to_string(),
        };
        let err = input.validate().expect_err("name must be rejected");
        assert_eq!(err.field, "name");
    }

    #[test]
    fn rejects_long_web_after_valid_name() {
        let input = NewspaperInput {
            name: "El Diario".to_string(),
            web: "w".repeat(201),
        };
        let err = input.validate().expect_err("web must be rejected");
        assert_eq!(err.field, "web");
    }
}
