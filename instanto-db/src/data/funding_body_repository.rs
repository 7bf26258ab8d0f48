use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::funding_body::{FundingBody, FundingBodyInput};
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

#[async_trait]
pub trait FundingBodyRepository: Send + Sync {
    async fn create(&self, input: &FundingBodyInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &FundingBodyInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<FundingBody>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<FundingBody>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Secondary funders of a project, with the link record.
    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<FundingBody>>, DomainError>;

    /// Fails if the project already has this funding body as primary.
    async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError>;
}
