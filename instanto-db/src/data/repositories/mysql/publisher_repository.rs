use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists,
};
use crate::data::publisher_repository::PublisherRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publisher::{Publisher, PublisherInput};

#[derive(Debug, Clone)]
pub struct MySqlPublisherRepository {
    pool: MySqlPool,
}

impl MySqlPublisherRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublisherRepository for MySqlPublisherRepository {
    async fn create(&self, input: &PublisherInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO publisher (name, created_by, updated_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
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
        input: &PublisherInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE publisher
            SET name = ?, updated_by = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Publisher::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Publisher>, DomainError> {
        fetch_by_id(&self.pool, Publisher::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Publisher>, DomainError> {
        fetch_all(&self.pool, Publisher::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Publisher::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Publisher::TABLE, id).await
    }
}
