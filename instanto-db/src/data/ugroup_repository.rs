use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::ugroup::{UGroup, UGroupInput};

/// User groups are keyed by their textual id, so every lookup takes a `&str`.
#[async_trait]
pub trait UGroupRepository: Send + Sync {
    /// Fails with a validation error on `id` when the id is taken.
    async fn create(&self, input: &UGroupInput) -> Result<(), DomainError>;
    async fn update_display_name(&self, id: &str, display_name: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: &str) -> Result<u64, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<UGroup>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<UGroup>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: &str) -> Result<bool, DomainError>;
}
