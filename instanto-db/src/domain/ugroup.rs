use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_length, validate_not_empty, validate_required_text};

const MAX_ID_LEN: usize = 50;

/// User group, keyed by a short textual id such as `admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UGroup {
    pub id: String,
    pub display_name: String,
}

impl UGroup {
    pub const TABLE: &'static str = "ugroup";
    pub const COLUMNS: &'static [&'static str] = &["id", "display_name"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UGroupInput {
    pub id: String,
    pub display_name: String,
}

impl UGroupInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("id", &self.id)?;
        validate_length("id", &self.id, MAX_ID_LEN)?;
        validate_display_name(&self.display_name)
    }
}

pub fn validate_display_name(display_name: &str) -> Result<(), ValidationError> {
    validate_required_text("display_name", display_name)
}

#[cfg(test)]
mod tests {
    use super::UGroupInput;

    #[test]
    fn id_and_display_name_are_required() {
        let input = UGroupInput {
            id: String::new(),
            display_name: "Editors".to_string(),
        };
        assert_eq!(input.validate().expect_err("must fail").field, "id");

        let input = UGroupInput {
            id: "editor".to_string(),
            display_name: String::new(),
        };
        assert_eq!(input.validate().expect_err("must fail").field, "display_name");
    }
}
