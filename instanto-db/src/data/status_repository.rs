use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::status::{Status, StatusInput};

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn create(&self, input: &StatusInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &StatusInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Status>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Status>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Secondary statuses held by a member.
    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<Status>>, DomainError>;

    /// Fails if the member already has this status as primary.
    async fn add_member(&self, id: i64, member_id: i64, created_by: &str)
    -> Result<(), DomainError>;
    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError>;
}
