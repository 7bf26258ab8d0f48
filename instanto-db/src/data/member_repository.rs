use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::member::{Member, MemberInput};
use crate::domain::order::OrderBy;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, input: &MemberInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &MemberInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn update_cv(&self, id: i64, cv: &str, updated_by: &str) -> Result<u64, DomainError>;
    async fn update_photo(&self, id: i64, photo: &str, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Member>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Member>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_primary_status(&self, status_id: i64) -> Result<Vec<Member>, DomainError>;
    async fn by_status(&self, status_id: i64) -> Result<Vec<Linked<Member>>, DomainError>;
    async fn by_partner(&self, partner_id: i64) -> Result<Vec<Linked<Member>>, DomainError>;
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError>;
    async fn by_financed_project_as_leader(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError>;
    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError>;
    /// Co-authors linked to a publication.
    async fn by_publication(&self, publication_id: i64)
    -> Result<Vec<Linked<Member>>, DomainError>;

    /// Fails if the status is already the member's primary.
    async fn add_status(&self, id: i64, status_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_status(&self, id: i64, status_id: i64) -> Result<bool, DomainError>;

    async fn add_partner(&self, id: i64, partner_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_partner(&self, id: i64, partner_id: i64) -> Result<bool, DomainError>;

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_line(&self, id: i64, research_line_id: i64)
    -> Result<bool, DomainError>;

    async fn add_financed_project_as_leader(
        &self,
        id: i64,
        financed_project_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_financed_project_as_leader(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError>;

    async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError>;

    async fn add_publication(&self, id: i64, publication_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_publication(&self, id: i64, publication_id: i64)
    -> Result<bool, DomainError>;
}
