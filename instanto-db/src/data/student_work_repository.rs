use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::student_work::{StudentWork, StudentWorkInput};

#[async_trait]
pub trait StudentWorkRepository: Send + Sync {
    async fn create(&self, input: &StudentWorkInput, created_by: &str)
    -> Result<i64, DomainError>;
    async fn update(
        &self,
        id: i64,
        input: &StudentWorkInput,
        updated_by: &str,
    ) -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<StudentWork>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<StudentWork>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_student_work_type(
        &self,
        student_work_type_id: i64,
    ) -> Result<Vec<StudentWork>, DomainError>;
    async fn by_author(&self, member_id: i64) -> Result<Vec<StudentWork>, DomainError>;
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<StudentWork>>, DomainError>;

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_line(&self, id: i64, research_line_id: i64)
    -> Result<bool, DomainError>;
}
