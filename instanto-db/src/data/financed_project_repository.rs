use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::financed_project::{FinancedProject, FinancedProjectInput};
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

#[async_trait]
pub trait FinancedProjectRepository: Send + Sync {
    async fn create(
        &self,
        input: &FinancedProjectInput,
        created_by: &str,
    ) -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &FinancedProjectInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<FinancedProject>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<FinancedProject>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_primary_funding_body(
        &self,
        funding_body_id: i64,
    ) -> Result<Vec<FinancedProject>, DomainError>;
    async fn by_primary_leader(&self, member_id: i64) -> Result<Vec<FinancedProject>, DomainError>;
    async fn by_funding_body(
        &self,
        funding_body_id: i64,
    ) -> Result<Vec<Linked<FinancedProject>>, DomainError>;
    async fn by_leader(&self, member_id: i64) -> Result<Vec<Linked<FinancedProject>>, DomainError>;
    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<FinancedProject>>, DomainError>;
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<FinancedProject>>, DomainError>;

    /// Fails if the funding body is already the project's primary.
    async fn add_funding_body(
        &self,
        id: i64,
        funding_body_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_funding_body(&self, id: i64, funding_body_id: i64)
    -> Result<bool, DomainError>;

    /// Fails if the member is already the project's primary leader.
    async fn add_leader(&self, id: i64, member_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_leader(&self, id: i64, member_id: i64) -> Result<bool, DomainError>;

    async fn add_member(&self, id: i64, member_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError>;

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_line(&self, id: i64, research_line_id: i64)
    -> Result<bool, DomainError>;
}
