use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{RESEARCH_AREA_RESEARCH_LINE, RESEARCH_LINE_RESEARCH_AREA};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists, update_text_column,
};
use crate::data::research_area_repository::ResearchAreaRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::research_area::{ResearchArea, ResearchAreaInput};

#[derive(Debug, Clone)]
pub struct MySqlResearchAreaRepository {
    pool: MySqlPool,
}

impl MySqlResearchAreaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResearchAreaRepository for MySqlResearchAreaRepository {
    async fn create(
        &self,
        input: &ResearchAreaInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO research_area (name, created_by, updated_by, created_at, updated_at)
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
        input: &ResearchAreaInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE research_area
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

    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError> {
        update_text_column(&self.pool, ResearchArea::TABLE, "logo", id, logo, updated_by).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, ResearchArea::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<ResearchArea>, DomainError> {
        fetch_by_id(&self.pool, ResearchArea::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<ResearchArea>, DomainError> {
        fetch_all(&self.pool, ResearchArea::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, ResearchArea::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, ResearchArea::TABLE, id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<ResearchArea>>, DomainError> {
        RESEARCH_LINE_RESEARCH_AREA
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_AREA_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        RESEARCH_AREA_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}
