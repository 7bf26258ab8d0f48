use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{MEMBER_STATUS, STATUS_MEMBER};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists,
};
use crate::data::status_repository::StatusRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::status::{Status, StatusInput};

#[derive(Debug, Clone)]
pub struct MySqlStatusRepository {
    pool: MySqlPool,
}

impl MySqlStatusRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for MySqlStatusRepository {
    async fn create(&self, input: &StatusInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO status (name, description, created_by, updated_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &StatusInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE status
            SET name = ?, description = ?, updated_by = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Status::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Status>, DomainError> {
        fetch_by_id(&self.pool, Status::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Status>, DomainError> {
        fetch_all(&self.pool, Status::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Status::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Status::TABLE, id).await
    }

    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<Status>>, DomainError> {
        MEMBER_STATUS.list_targets(&self.pool, member_id).await
    }

    async fn add_member(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        STATUS_MEMBER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        STATUS_MEMBER.remove(&self.pool, id, member_id).await
    }
}
