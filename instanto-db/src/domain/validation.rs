//! Field rules shared by every entity. Each check returns on the first
//! violation so composite validators can be chained with `?`.

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Default column width for free-text fields.
pub const MAX_TEXT_LEN: usize = 200;

pub fn validate_not_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Length is counted in characters, matching how MySQL sizes `VARCHAR` columns.
pub fn validate_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("length cannot be greater than {max}"),
        ));
    }
    Ok(())
}

/// Non-negativity check for years, dates, budgets and sizes.
pub fn validate_is_number(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, "cannot be negative"));
    }
    Ok(())
}

pub fn validate_scope(field: &str, value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Scope>()
        .map(|_| ())
        .map_err(|_| ValidationError::new(field, "value must be regional, national or international"))
}

pub fn validate_degree(field: &str, value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Degree>()
        .map(|_| ())
        .map_err(|_| ValidationError::new(field, "value must be none, dr or dra"))
}

/// Required text column: non-empty and within [`MAX_TEXT_LEN`].
pub(crate) fn validate_required_text(field: &str, value: &str) -> Result<(), ValidationError> {
    validate_not_empty(field, value)?;
    validate_length(field, value, MAX_TEXT_LEN)
}

pub(crate) fn validate_optional_text(field: &str, value: &str) -> Result<(), ValidationError> {
    validate_length(field, value, MAX_TEXT_LEN)
}

/// Path or URL of an uploaded logo.
pub fn validate_logo(logo: &str) -> Result<(), ValidationError> {
    validate_optional_text("logo", logo)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Regional,
    National,
    International,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Regional => "regional",
            Scope::National => "national",
            Scope::International => "international",
        }
    }
}

impl FromStr for Scope {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "regional" => Ok(Scope::Regional),
            "national" => Ok(Scope::National),
            "international" => Ok(Scope::International),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic title of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    None,
    Dr,
    Dra,
}

impl Degree {
    pub fn as_str(self) -> &'static str {
        match self {
            Degree::None => "none",
            Degree::Dr => "dr",
            Degree::Dra => "dra",
        }
    }
}

impl FromStr for Degree {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Degree::None),
            "dr" => Ok(Degree::Dr),
            "dra" => Ok(Degree::Dra),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Degree, Scope, validate_degree, validate_is_number, validate_length, validate_logo,
        validate_not_empty, validate_required_text, validate_scope,
    };

    #[test]
    fn not_empty_rejects_empty_value() {
        let err = validate_not_empty("title", "").expect_err("empty value must fail");
        assert_eq!(err.field, "title");
        assert_eq!(err.reason, "cannot be empty");
        assert!(validate_not_empty("title", "x").is_ok());
    }

    #[test]
    fn length_rejects_every_value_over_max() {
        for max in [0usize, 1, 5, 200] {
            let exact = "a".repeat(max);
            assert!(validate_length("web", &exact, max).is_ok());

            let over = "a".repeat(max + 1);
            let err = validate_length("web", &over, max).expect_err("over max must fail");
            assert_eq!(err.field, "web");
            assert_eq!(err.reason, format!("length cannot be greater than {max}"));
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let value = "ñ".repeat(200);
        assert!(value.len() > 200);
        assert!(validate_length("name", &value, 200).is_ok());
    }

    #[test]
    fn is_number_rejects_negatives_only() {
        for value in [-1, -2, -1_000, i64::MIN] {
            let err = validate_is_number("date", value).expect_err("negative must fail");
            assert_eq!(err.field, "date");
        }
        for value in [0, 1, 2_024, i64::MAX] {
            assert!(validate_is_number("date", value).is_ok());
        }
    }

    #[test]
    fn scope_accepts_known_values() {
        for value in ["regional", "national", "international"] {
            assert!(validate_scope("scope", value).is_ok(), "{value} must be accepted");
        }
        let err = validate_scope("scope", "galactic").expect_err("unknown scope must fail");
        assert_eq!(err.field, "scope");
    }

    #[test]
    fn scope_is_case_sensitive() {
        assert!(validate_scope("scope", "National").is_err());
        assert_eq!("national".parse::<Scope>(), Ok(Scope::National));
        assert_eq!(Scope::International.to_string(), "international");
    }

    #[test]
    fn degree_accepts_known_values() {
        for value in ["none", "dr", "dra"] {
            assert!(validate_degree("degree", value).is_ok());
        }
        let err = validate_degree("degree", "phd").expect_err("unknown degree must fail");
        assert_eq!(err.field, "degree");
        assert_eq!(Degree::Dra.as_str(), "dra");
    }

    #[test]
    fn logo_is_length_checked() {
        assert!(validate_logo("logo.png").is_ok());
        assert_eq!(validate_logo(&"l".repeat(201)).expect_err("must fail").field, "logo");
    }

    #[test]
    fn required_text_checks_emptiness_before_length() {
        let err = validate_required_text("name", "").expect_err("must fail");
        assert_eq!(err.reason, "cannot be empty");

        let err = validate_required_text("name", &"n".repeat(201)).expect_err("must fail");
        assert_eq!(err.reason, "length cannot be greater than 200");
    }
}
