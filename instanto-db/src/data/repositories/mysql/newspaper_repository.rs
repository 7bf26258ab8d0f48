use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists, update_text_column,
};
use crate::data::newspaper_repository::NewspaperRepository;
use crate::domain::error::DomainError;
use crate::domain::newspaper::{Newspaper, NewspaperInput};
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlNewspaperRepository {
    pool: MySqlPool,
}

impl MySqlNewspaperRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewspaperRepository for MySqlNewspaperRepository {
    async fn create(&self, input: &NewspaperInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO newspaper (name, web, created_by, updated_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
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
        input: &NewspaperInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE newspaper
            SET name = ?, web = ?, updated_by = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError> {
        update_text_column(&self.pool, Newspaper::TABLE, "logo", id, logo, updated_by).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Newspaper::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Newspaper>, DomainError> {
        fetch_by_id(&self.pool, Newspaper::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Newspaper>, DomainError> {
        fetch_all(&self.pool, Newspaper::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Newspaper::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Newspaper::TABLE, id).await
    }
}
