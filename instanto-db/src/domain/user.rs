use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text};

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 128;

/// Back-office account. `password` holds the Argon2 PHC string and never
/// leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub enabled: bool,
    pub display_name: String,
    pub ugroup: String,
}

impl User {
    pub const TABLE: &'static str = "user";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub enabled: bool,
    pub display_name: String,
    pub ugroup: String,
}

impl NewUserInput {
    /// Trims the username, lowercases the email and checks every field.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let username = self.username.trim().to_string();
        validate_required_text("username", &username)?;

        let email = normalize_email(&self.email)?;

        let password_len = self.password.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password_len) {
            return Err(ValidationError::new(
                "password",
                format!("must be {PASSWORD_MIN_LEN}..{PASSWORD_MAX_LEN} chars"),
            ));
        }

        validate_optional_text("display_name", &self.display_name)?;

        Ok(Self {
            username,
            email,
            ..self
        })
    }
}

/// Row handed to the repository once the password is hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub enabled: bool,
    pub display_name: String,
    pub ugroup: String,
}

fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();
    if !email.validate_email() {
        return Err(ValidationError::new("email", "must be a valid email"));
    }
    validate_optional_text("email", &email)?;
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::{NewUserInput, User, normalize_email};

    fn input() -> NewUserInput {
        NewUserInput {
            username: "  editor ".to_string(),
            email: "Editor@Example.ORG".to_string(),
            password: "very-secure-password".to_string(),
            enabled: true,
            display_name: "Editor".to_string(),
            ugroup: "admin".to_string(),
        }
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let value = normalize_email("  TeSt@Example.COM ").expect("must be valid");
        assert_eq!(value, "test@example.com");
        assert!(normalize_email("not-an-email").is_err());
    }

    #[test]
    fn validate_normalizes_username_and_email() {
        let validated = input().validate().expect("must be valid");
        assert_eq!(validated.username, "editor");
        assert_eq!(validated.email, "editor@example.org");
    }

    #[test]
    fn password_length_is_checked() {
        let short = NewUserInput {
            password: "short".to_string(),
            ..input()
        };
        assert_eq!(short.validate().expect_err("must fail").field, "password");
    }

    #[test]
    fn blank_username_is_rejected_first() {
        let blank = NewUserInput {
            username: "   ".to_string(),
            email: "broken".to_string(),
            ..input()
        };
        let err = blank.validate().expect_err("must fail");
        assert_eq!(err.field, "username");
        assert_eq!(err.reason, "cannot be empty");
    }

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            username: "editor".to_string(),
            email: "editor@example.org".to_string(),
            password: "$argon2id$secret".to_string(),
            enabled: true,
            display_name: "Editor".to_string(),
            ugroup: "admin".to_string(),
        };
        let json = serde_json::to_value(&user).expect("must serialize");
        assert!(json.get("password").is_none());
        assert_eq!(json["ugroup"], "admin");
    }
}
