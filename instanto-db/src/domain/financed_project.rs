use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{
    validate_is_number, validate_optional_text, validate_required_text, validate_scope,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct FinancedProject {
    pub id: i64,
    pub title: String,
    pub started: i64,
    pub ended: i64,
    pub budget: i64,
    pub scope: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub primary_funding_body: i64,
    pub primary_record: String,
    pub primary_leader: i64,
}

impl FinancedProject {
    pub const TABLE: &'static str = "financed_project";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "started",
        "ended",
        "budget",
        "scope",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "primary_funding_body",
        "primary_record",
        "primary_leader",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancedProjectInput {
    pub title: String,
    pub started: i64,
    pub ended: i64,
    pub budget: i64,
    pub scope: String,
    pub primary_funding_body: i64,
    pub primary_record: String,
    pub primary_leader: i64,
}

impl FinancedProjectInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("title", &self.title)?;
        validate_is_number("started", self.started)?;
        validate_is_number("ended", self.ended)?;
        validate_is_number("budget", self.budget)?;
        validate_scope("scope", &self.scope)?;
        validate_optional_text("primary_record", &self.primary_record)
    }
}

#[cfg(test)]
mod tests {
    use super::FinancedProjectInput;

    fn input() -> FinancedProjectInput {
        FinancedProjectInput {
            title: "Semantic web for archives".to_string(),
            started: 1_356_998_400,
            ended: 1_451_606_400,
            budget: 120_000,
            scope: "national".to_string(),
            primary_funding_body: 1,
            primary_record: "TIN2012-0001".to_string(),
            primary_leader: 1,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn checks_run_in_order() {
        let bad = FinancedProjectInput {
            ended: -1,
            budget: -1,
            scope: "galactic".to_string(),
            ..input()
        };
        assert_eq!(bad.validate().expect_err("must fail").field, "ended");

        let bad = FinancedProjectInput {
            budget: -1,
            scope: "galactic".to_string(),
            ..input()
        };
        assert_eq!(bad.validate().expect_err("must fail").field, "budget");

        let bad = FinancedProjectInput {
            scope: "galactic".to_string(),
            ..input()
        };
        assert_eq!(bad.validate().expect_err("must fail").field, "scope");
    }
}
