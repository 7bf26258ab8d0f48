use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<(), DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
