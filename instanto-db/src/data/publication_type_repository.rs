use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publication_type::{PublicationType, PublicationTypeInput};

#[async_trait]
pub trait PublicationTypeRepository: Send + Sync {
    async fn create(&self, input: &PublicationTypeInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &PublicationTypeInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<PublicationType>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<PublicationType>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;
}
