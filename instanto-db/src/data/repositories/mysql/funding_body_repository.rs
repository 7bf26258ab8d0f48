use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{FINANCED_PROJECT_FUNDING_BODY, FUNDING_BODY_FINANCED_PROJECT};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists,
};
use crate::data::funding_body_repository::FundingBodyRepository;
use crate::domain::error::DomainError;
use crate::domain::funding_body::{FundingBody, FundingBodyInput};
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlFundingBodyRepository {
    pool: MySqlPool,
}

impl MySqlFundingBodyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FundingBodyRepository for MySqlFundingBodyRepository {
    async fn create(&self, input: &FundingBodyInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO funding_body (name, web, scope, created_by, updated_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
        .bind(&input.scope)
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
        input: &FundingBodyInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE funding_body
            SET name = ?, web = ?, scope = ?, updated_by = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
        .bind(&input.scope)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, FundingBody::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<FundingBody>, DomainError> {
        fetch_by_id(&self.pool, FundingBody::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<FundingBody>, DomainError> {
        fetch_all(&self.pool, FundingBody::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, FundingBody::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, FundingBody::TABLE, id).await
    }

    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<FundingBody>>, DomainError> {
        FINANCED_PROJECT_FUNDING_BODY
            .list_targets(&self.pool, financed_project_id)
            .await
    }

    async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError> {
        FUNDING_BODY_FINANCED_PROJECT
            .add(&self.pool, id, financed_project_id, created_by, Some(record))
            .await
    }

    async fn remove_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError> {
        FUNDING_BODY_FINANCED_PROJECT
            .remove(&self.pool, id, financed_project_id)
            .await
    }
}
