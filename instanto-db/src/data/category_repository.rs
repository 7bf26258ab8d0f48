use async_trait::async_trait;

use crate::domain::category::{Category, CategoryInput};
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;

/// Content categories. Nothing references them yet; they only carry a
/// name and a short description.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: &CategoryInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &CategoryInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Category>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Category>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;
}
