use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::research_line::{ResearchLine, ResearchLineInput};

#[async_trait]
pub trait ResearchLineRepository: Send + Sync {
    async fn create(&self, input: &ResearchLineInput, created_by: &str)
    -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &ResearchLineInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<ResearchLine>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<ResearchLine>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_primary_research_area(
        &self,
        research_area_id: i64,
    ) -> Result<Vec<ResearchLine>, DomainError>;
    async fn by_research_area(
        &self,
        research_area_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_article(&self, article_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_partner(&self, partner_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_publication(
        &self,
        publication_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError>;
    async fn by_student_work(
        &self,
        student_work_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError>;

    /// Fails if the area is already the line's primary.
    async fn add_research_area(
        &self,
        id: i64,
        research_area_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_area(&self, id: i64, research_area_id: i64)
    -> Result<bool, DomainError>;

    async fn add_article(&self, id: i64, article_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_article(&self, id: i64, article_id: i64) -> Result<bool, DomainError>;

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

    async fn add_partner(&self, id: i64, partner_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_partner(&self, id: i64, partner_id: i64) -> Result<bool, DomainError>;

    async fn add_member(&self, id: i64, member_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError>;

    async fn add_publication(&self, id: i64, publication_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_publication(&self, id: i64, publication_id: i64)
    -> Result<bool, DomainError>;

    async fn add_student_work(&self, id: i64, student_work_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_student_work(&self, id: i64, student_work_id: i64)
    -> Result<bool, DomainError>;
}
