use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, NewUserInput, User};

const LOGIN_FIELD: &str = "username/password";
const LOGIN_REASON: &str = "not match";

pub struct AuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, input: NewUserInput) -> Result<(), DomainError> {
        let input = input.validate()?;
        let password_hash = self.hash_password(&input.password)?;
        self.repo
            .create_user(Self::into_new_user(input, password_hash))
            .await
    }

    /// Returns the account when the password matches. Unknown users and wrong
    /// passwords fail the same way.
    pub async fn check_login(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let user = match self.repo.find_by_username(username.trim()).await? {
            Some(user) => user,
            None => {
                // keep the response time close to the found-user path
                match self.verify_password(password, Self::DUMMY_PASSWORD_HASH) {
                    Ok(()) | Err(DomainError::Validation(_)) => {}
                    Err(err) => return Err(err),
                }
                return Err(Self::login_mismatch());
            }
        };

        self.verify_password(password, &user.password)?;
        Ok(user)
    }

    pub fn hash_password(&self, raw_password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Self::argon2()?
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(password_hash.to_string())
    }

    pub fn verify_password(&self, raw_password: &str, password_hash: &str) -> Result<(), DomainError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Self::argon2()?
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .map_err(|err| match err {
                PasswordHashError::Password => Self::login_mismatch(),
                _ => DomainError::Unexpected(err.to_string()),
            })
    }

    fn into_new_user(input: NewUserInput, password_hash: String) -> NewUser {
        NewUser {
            username: input.username,
            email: input.email,
            password_hash,
            enabled: input.enabled,
            display_name: input.display_name,
            ugroup: input.ugroup,
        }
    }

    fn login_mismatch() -> DomainError {
        DomainError::validation(LOGIN_FIELD, LOGIN_REASON)
    }

    fn argon2() -> Result<Argon2<'static>, DomainError> {
        let params = Params::new(19 * 1024, 2, 1, None)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::AuthService;
    use crate::data::user_repository::UserRepository;
    use crate::domain::error::DomainError;
    use crate::domain::user::{NewUser, NewUserInput, User};

    #[derive(Clone, Default)]
    struct FakeUserRepo {
        created_input: Arc<Mutex<Option<NewUser>>>,
        stored_user: Arc<Mutex<Option<User>>>,
    }

    impl FakeUserRepo {
        fn set_stored_user(&self, user: Option<User>) {
            *self.stored_user.lock().expect("stored user mutex poisoned") = user;
        }

        fn take_created_input(&self) -> Option<NewUser> {
            self.created_input
                .lock()
                .expect("created input mutex poisoned")
                .take()
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, input: NewUser) -> Result<(), DomainError> {
            *self
                .created_input
                .lock()
                .expect("created input mutex poisoned") = Some(input);
            Ok(())
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .stored_user
                .lock()
                .expect("stored user mutex poisoned")
                .clone())
        }
    }

    fn new_user_input(password: &str) -> NewUserInput {
        NewUserInput {
            username: "  editor  ".to_string(),
            email: "  EDITOR@EXAMPLE.ORG ".to_string(),
            password: password.to_string(),
            enabled: true,
            display_name: "Editor".to_string(),
            ugroup: "admin".to_string(),
        }
    }

    fn stored_user(password_hash: String) -> User {
        User {
            username: "editor".to_string(),
            email: "editor@example.org".to_string(),
            password: password_hash,
            enabled: true,
            display_name: "Editor".to_string(),
            ugroup: "admin".to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_stores_normalized_input_and_a_hash() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone());

        service
            .create_user(new_user_input("very-secure-password"))
            .await
            .expect("create_user must succeed");

        let created = repo.take_created_input().expect("create_user must be called");
        assert_eq!(created.username, "editor");
        assert_eq!(created.email, "editor@example.org");
        assert!(created.password_hash.starts_with("$argon2id$"));
        assert_ne!(created.password_hash, "very-secure-password");
    }

    #[tokio::test]
    async fn create_user_rejects_short_password_without_storing() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone());

        let err = service
            .create_user(new_user_input("short"))
            .await
            .expect_err("create_user must fail");
        assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("password"));
        assert!(repo.take_created_input().is_none());
    }

    #[tokio::test]
    async fn check_login_rejects_unknown_user() {
        let repo = FakeUserRepo::default();
        repo.set_stored_user(None);
        let service = AuthService::new(repo);

        let err = service
            .check_login("ghost", "some-password")
            .await
            .expect_err("login must fail");
        let validation = err.as_validation().expect("must be a validation error");
        assert_eq!(validation.field, "username/password");
        assert_eq!(validation.reason, "not match");
    }

    #[tokio::test]
    async fn check_login_rejects_wrong_password() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone());
        let hash = service
            .hash_password("correct-password")
            .expect("hash must be created");
        repo.set_stored_user(Some(stored_user(hash)));

        let err = service
            .check_login("editor", "wrong-password")
            .await
            .expect_err("login must fail");
        assert_eq!(
            err.as_validation().map(|v| v.reason.as_str()),
            Some("not match")
        );
    }

    #[tokio::test]
    async fn check_login_returns_user_for_valid_credentials() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone());
        let hash = service
            .hash_password("correct-password")
            .expect("hash must be created");
        repo.set_stored_user(Some(stored_user(hash)));

        let user = service
            .check_login("editor", "correct-password")
            .await
            .expect("login must succeed");
        assert_eq!(user.username, "editor");
    }
}
