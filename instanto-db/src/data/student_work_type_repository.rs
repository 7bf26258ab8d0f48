use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::student_work_type::{StudentWorkType, StudentWorkTypeInput};

#[async_trait]
pub trait StudentWorkTypeRepository: Send + Sync {
    async fn create(&self, input: &StudentWorkTypeInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &StudentWorkTypeInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<StudentWorkType>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<StudentWorkType>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;
}
