use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{
    FINANCED_PROJECT_FUNDING_BODY, FINANCED_PROJECT_LEADER, FINANCED_PROJECT_MEMBER,
    FINANCED_PROJECT_RESEARCH_LINE, FUNDING_BODY_FINANCED_PROJECT,
    MEMBER_FINANCED_PROJECT, MEMBER_FINANCED_PROJECT_AS_LEADER, RESEARCH_LINE_FINANCED_PROJECT,
};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists,
};
use crate::data::financed_project_repository::FinancedProjectRepository;
use crate::domain::error::DomainError;
use crate::domain::financed_project::{FinancedProject, FinancedProjectInput};
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlFinancedProjectRepository {
    pool: MySqlPool,
}

impl MySqlFinancedProjectRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FinancedProjectRepository for MySqlFinancedProjectRepository {
    async fn create(
        &self,
        input: &FinancedProjectInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO financed_project (
                title, started, ended, budget, scope,
                created_by, updated_by, created_at, updated_at,
                primary_funding_body, primary_record, primary_leader
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(input.started)
        .bind(input.ended)
        .bind(input.budget)
        .bind(&input.scope)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .bind(input.primary_funding_body)
        .bind(&input.primary_record)
        .bind(input.primary_leader)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &FinancedProjectInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE financed_project
            SET title = ?, started = ?, ended = ?, budget = ?, scope = ?,
                updated_by = ?, updated_at = ?,
                primary_funding_body = ?, primary_record = ?, primary_leader = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(input.started)
        .bind(input.ended)
        .bind(input.budget)
        .bind(&input.scope)
        .bind(updated_by)
        .bind(now_ts())
        .bind(input.primary_funding_body)
        .bind(&input.primary_record)
        .bind(input.primary_leader)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, FinancedProject::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<FinancedProject>, DomainError> {
        fetch_by_id(&self.pool, FinancedProject::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<FinancedProject>, DomainError> {
        fetch_all(&self.pool, FinancedProject::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, FinancedProject::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, FinancedProject::TABLE, id).await
    }

    async fn by_primary_funding_body(
        &self,
        funding_body_id: i64,
    ) -> Result<Vec<FinancedProject>, DomainError> {
        fetch_by_column(
            &self.pool,
            FinancedProject::TABLE,
            "primary_funding_body",
            funding_body_id,
        )
        .await
    }

    async fn by_primary_leader(&self, member_id: i64) -> Result<Vec<FinancedProject>, DomainError> {
        fetch_by_column(&self.pool, FinancedProject::TABLE, "primary_leader", member_id).await
    }

    async fn by_funding_body(
        &self,
        funding_body_id: i64,
    ) -> Result<Vec<Linked<FinancedProject>>, DomainError> {
        FUNDING_BODY_FINANCED_PROJECT
            .list_targets(&self.pool, funding_body_id)
            .await
    }

    async fn by_leader(&self, member_id: i64) -> Result<Vec<Linked<FinancedProject>>, DomainError> {
        MEMBER_FINANCED_PROJECT_AS_LEADER
            .list_targets(&self.pool, member_id)
            .await
    }

    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<FinancedProject>>, DomainError> {
        MEMBER_FINANCED_PROJECT
            .list_targets(&self.pool, member_id)
            .await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<FinancedProject>>, DomainError> {
        RESEARCH_LINE_FINANCED_PROJECT
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_funding_body(
        &self,
        id: i64,
        funding_body_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError> {
        FINANCED_PROJECT_FUNDING_BODY
            .add(&self.pool, id, funding_body_id, created_by, Some(record))
            .await
    }

    async fn remove_funding_body(
        &self,
        id: i64,
        funding_body_id: i64,
    ) -> Result<bool, DomainError> {
        FINANCED_PROJECT_FUNDING_BODY
            .remove(&self.pool, id, funding_body_id)
            .await
    }

    async fn add_leader(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        FINANCED_PROJECT_LEADER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_leader(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        FINANCED_PROJECT_LEADER
            .remove(&self.pool, id, member_id)
            .await
    }

    async fn add_member(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        FINANCED_PROJECT_MEMBER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        FINANCED_PROJECT_MEMBER
            .remove(&self.pool, id, member_id)
            .await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        FINANCED_PROJECT_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        FINANCED_PROJECT_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}
