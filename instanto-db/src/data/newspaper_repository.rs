use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::newspaper::{Newspaper, NewspaperInput};
use crate::domain::order::OrderBy;

#[async_trait]
pub trait NewspaperRepository: Send + Sync {
    async fn create(&self, input: &NewspaperInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &NewspaperInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Newspaper>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Newspaper>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;
}
