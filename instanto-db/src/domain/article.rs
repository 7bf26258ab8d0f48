use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_is_number, validate_optional_text, validate_required_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub web: String,
    pub date: i64,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub newspaper: i64,
}

impl Article {
    pub const TABLE: &'static str = "article";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "web",
        "date",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "newspaper",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub web: String,
    /// Publication date as Unix seconds.
    pub date: i64,
    pub newspaper: i64,
}

impl ArticleInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("title", &self.title)?;
        validate_optional_text("web", &self.web)?;
        validate_is_number("date", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleInput;

    fn input() -> ArticleInput {
        ArticleInput {
            title: "Research week".to_string(),
            web: "https://example.org/a".to_string(),
            date: 1_400_000_000,
            newspaper: 1,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn title_is_checked_first() {
        let bad = ArticleInput {
            title: "t".repeat(201),
            web: "w".repeat(201),
            date: -1,
            ..input()
        };
        let err = bad.validate().expect_err("must fail");
        assert_eq!(err.field, "title");
    }

    #[test]
    fn negative_date_is_rejected() {
        let bad = ArticleInput { date: -5, ..input() };
        let err = bad.validate().expect_err("must fail");
        assert_eq!(err.field, "date");
    }
}
