use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::research_area::{ResearchArea, ResearchAreaInput};

#[async_trait]
pub trait ResearchAreaRepository: Send + Sync {
    async fn create(&self, input: &ResearchAreaInput, created_by: &str)
    -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &ResearchAreaInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<ResearchArea>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<ResearchArea>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Secondary areas of a research line.
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<ResearchArea>>, DomainError>;

    /// Fails if the line already has this area as primary.
    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_line(&self, id: i64, research_line_id: i64)
    -> Result<bool, DomainError>;
}
