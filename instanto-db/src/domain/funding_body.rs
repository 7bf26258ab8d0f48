use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text, validate_scope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct FundingBody {
    pub id: i64,
    pub name: String,
    pub web: String,
    pub scope: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl FundingBody {
    pub const TABLE: &'static str = "funding_body";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "web",
        "scope",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingBodyInput {
    pub name: String,
    pub web: String,
    pub scope: String,
}

impl FundingBodyInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)?;
        validate_optional_text("web", &self.web)?;
        validate_scope("scope", &self.scope)
    }
}

/// Grant reference stored on a funding link.
pub fn validate_record(record: &str) -> Result<(), ValidationError> {
    validate_optional_text("record", record)
}

#[cfg(test)]
mod tests {
    use super::{FundingBodyInput, validate_record};

    #[test]
    fn scope_must_be_known() {
        let input = FundingBodyInput {
            name: "Ministry".to_string(),
            web: String::new(),
            scope: "local".to_string(),
        };
        let err = input.validate().expect_err("scope must be rejected");
        assert_eq!(err.field, "scope");
    }

    #[test]
    fn record_is_length_checked() {
        assert!(validate_record("TIN2013-1234").is_ok());
        let err = validate_record(&"r".repeat(201)).expect_err("must fail");
        assert_eq!(err.field, "record");
    }
}
