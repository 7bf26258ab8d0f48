use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{
    validate_degree, validate_is_number, validate_optional_text, validate_required_text,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub degree: String,
    pub year_in: i64,
    pub year_out: i64,
    pub email: String,
    pub cv: String,
    pub photo: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub primary_status: i64,
}

impl Member {
    pub const TABLE: &'static str = "member";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "degree",
        "year_in",
        "year_out",
        "email",
        "cv",
        "photo",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "primary_status",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInput {
    pub first_name: String,
    pub last_name: String,
    pub degree: String,
    pub year_in: i64,
    pub year_out: i64,
    pub email: String,
    pub primary_status: i64,
}

impl MemberInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("first_name", &self.first_name)?;
        validate_required_text("last_name", &self.last_name)?;
        validate_degree("degree", &self.degree)?;
        validate_is_number("year_in", self.year_in)?;
        validate_is_number("year_out", self.year_out)?;
        validate_optional_text("email", &self.email)
    }
}

pub fn validate_cv(cv: &str) -> Result<(), ValidationError> {
    validate_optional_text("cv", cv)
}

pub fn validate_photo(photo: &str) -> Result<(), ValidationError> {
    validate_optional_text("photo", photo)
}

#[cfg(test)]
mod tests {
    use super::MemberInput;

    fn input() -> MemberInput {
        MemberInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            degree: "dra".to_string(),
            year_in: 2005,
            year_out: 0,
            email: "ada@example.org".to_string(),
            primary_status: 1,
        }
    }

    #[test]
    fn valid_member_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn unknown_degree_is_rejected() {
        let bad = MemberInput {
            degree: "prof".to_string(),
            ..input()
        };
        assert_eq!(bad.validate().expect_err("must fail").field, "degree");
    }

    #[test]
    fn empty_last_name_is_reported_before_degree() {
        let bad = MemberInput {
            last_name: String::new(),
            degree: "prof".to_string(),
            ..input()
        };
        assert_eq!(bad.validate().expect_err("must fail").field, "last_name");
    }
}
