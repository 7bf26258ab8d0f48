use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists,
};
use crate::data::category_repository::CategoryRepository;
use crate::domain::category::{Category, CategoryInput};
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn create(&self, input: &CategoryInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO category (name, description, created_by, updated_by, created_at, updated_at)
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
        input: &CategoryInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE category
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
        delete_by_id(&self.pool, Category::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Category>, DomainError> {
        fetch_by_id(&self.pool, Category::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Category>, DomainError> {
        fetch_all(&self.pool, Category::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Category::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Category::TABLE, id).await
    }
}
