use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::publication::{Publication, PublicationInput};

#[async_trait]
pub trait PublicationRepository: Send + Sync {
    async fn create(&self, input: &PublicationInput, created_by: &str)
    -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &PublicationInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Publication>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Publication>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_publication_type(
        &self,
        publication_type_id: i64,
    ) -> Result<Vec<Publication>, DomainError>;
    async fn by_publisher(&self, publisher_id: i64) -> Result<Vec<Publication>, DomainError>;
    async fn by_primary_author(&self, member_id: i64) -> Result<Vec<Publication>, DomainError>;
    /// Publications a member is linked to as co-author.
    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<Publication>>, DomainError>;
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Publication>>, DomainError>;

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
