use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists,
};
use crate::data::publication_type_repository::PublicationTypeRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publication_type::{PublicationType, PublicationTypeInput};

#[derive(Debug, Clone)]
pub struct MySqlPublicationTypeRepository {
    pool: MySqlPool,
}

impl MySqlPublicationTypeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicationTypeRepository for MySqlPublicationTypeRepository {
    async fn create(&self, input: &PublicationTypeInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO publication_type (name, created_by, updated_by, created_at, updated_at)
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
        input: &PublicationTypeInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE publication_type
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
        delete_by_id(&self.pool, PublicationType::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<PublicationType>, DomainError> {
        fetch_by_id(&self.pool, PublicationType::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<PublicationType>, DomainError> {
        fetch_all(&self.pool, PublicationType::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, PublicationType::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, PublicationType::TABLE, id).await
    }
}
