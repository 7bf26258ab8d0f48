use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{
    ARTICLE_RESEARCH_LINE, FINANCED_PROJECT_RESEARCH_LINE, MEMBER_RESEARCH_LINE,
    PARTNER_RESEARCH_LINE, PUBLICATION_RESEARCH_LINE, RESEARCH_AREA_RESEARCH_LINE,
    RESEARCH_LINE_ARTICLE, RESEARCH_LINE_FINANCED_PROJECT, RESEARCH_LINE_MEMBER,
    RESEARCH_LINE_PARTNER, RESEARCH_LINE_PUBLICATION, RESEARCH_LINE_RESEARCH_AREA,
    RESEARCH_LINE_STUDENT_WORK, STUDENT_WORK_RESEARCH_LINE,
};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists, update_text_column,
};
use crate::data::research_line_repository::ResearchLineRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::research_line::{ResearchLine, ResearchLineInput};

#[derive(Debug, Clone)]
pub struct MySqlResearchLineRepository {
    pool: MySqlPool,
}

impl MySqlResearchLineRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResearchLineRepository for MySqlResearchLineRepository {
    async fn create(
        &self,
        input: &ResearchLineInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO research_line (
                title, finished, description,
                created_by, updated_by, created_at, updated_at, primary_research_area
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(input.finished)
        .bind(&input.description)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .bind(input.primary_research_area)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &ResearchLineInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE research_line
            SET title = ?, finished = ?, description = ?, updated_by = ?, updated_at = ?,
                primary_research_area = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(input.finished)
        .bind(&input.description)
        .bind(updated_by)
        .bind(now_ts())
        .bind(input.primary_research_area)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError> {
        update_text_column(&self.pool, ResearchLine::TABLE, "logo", id, logo, updated_by).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, ResearchLine::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<ResearchLine>, DomainError> {
        fetch_by_id(&self.pool, ResearchLine::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<ResearchLine>, DomainError> {
        fetch_all(&self.pool, ResearchLine::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, ResearchLine::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, ResearchLine::TABLE, id).await
    }

    async fn by_primary_research_area(
        &self,
        research_area_id: i64,
    ) -> Result<Vec<ResearchLine>, DomainError> {
        fetch_by_column(
            &self.pool,
            ResearchLine::TABLE,
            "primary_research_area",
            research_area_id,
        )
        .await
    }

    async fn by_research_area(
        &self,
        research_area_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        RESEARCH_AREA_RESEARCH_LINE
            .list_targets(&self.pool, research_area_id)
            .await
    }

    async fn by_article(&self, article_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        ARTICLE_RESEARCH_LINE
            .list_targets(&self.pool, article_id)
            .await
    }

    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        FINANCED_PROJECT_RESEARCH_LINE
            .list_targets(&self.pool, financed_project_id)
            .await
    }

    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        MEMBER_RESEARCH_LINE.list_targets(&self.pool, member_id).await
    }

    async fn by_partner(&self, partner_id: i64) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        PARTNER_RESEARCH_LINE
            .list_targets(&self.pool, partner_id)
            .await
    }

    async fn by_publication(
        &self,
        publication_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        PUBLICATION_RESEARCH_LINE
            .list_targets(&self.pool, publication_id)
            .await
    }

    async fn by_student_work(
        &self,
        student_work_id: i64,
    ) -> Result<Vec<Linked<ResearchLine>>, DomainError> {
        STUDENT_WORK_RESEARCH_LINE
            .list_targets(&self.pool, student_work_id)
            .await
    }

    async fn add_research_area(
        &self,
        id: i64,
        research_area_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_RESEARCH_AREA
            .add(&self.pool, id, research_area_id, created_by, None)
            .await
    }

    async fn remove_research_area(
        &self,
        id: i64,
        research_area_id: i64,
    ) -> Result<bool, DomainError> {
        RESEARCH_LINE_RESEARCH_AREA
            .remove(&self.pool, id, research_area_id)
            .await
    }

    async fn add_article(
        &self,
        id: i64,
        article_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_ARTICLE
            .add(&self.pool, id, article_id, created_by, None)
            .await
    }

    async fn remove_article(&self, id: i64, article_id: i64) -> Result<bool, DomainError> {
        RESEARCH_LINE_ARTICLE
            .remove(&self.pool, id, article_id)
            .await
    }

    async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_FINANCED_PROJECT
            .add(&self.pool, id, financed_project_id, created_by, None)
            .await
    }

    async fn remove_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError> {
        RESEARCH_LINE_FINANCED_PROJECT
            .remove(&self.pool, id, financed_project_id)
            .await
    }

    async fn add_partner(
        &self,
        id: i64,
        partner_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_PARTNER
            .add(&self.pool, id, partner_id, created_by, None)
            .await
    }

    async fn remove_partner(&self, id: i64, partner_id: i64) -> Result<bool, DomainError> {
        RESEARCH_LINE_PARTNER
            .remove(&self.pool, id, partner_id)
            .await
    }

    async fn add_member(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_MEMBER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        RESEARCH_LINE_MEMBER
            .remove(&self.pool, id, member_id)
            .await
    }

    async fn add_publication(
        &self,
        id: i64,
        publication_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_PUBLICATION
            .add(&self.pool, id, publication_id, created_by, None)
            .await
    }

    async fn remove_publication(&self, id: i64, publication_id: i64) -> Result<bool, DomainError> {
        RESEARCH_LINE_PUBLICATION
            .remove(&self.pool, id, publication_id)
            .await
    }

    async fn add_student_work(
        &self,
        id: i64,
        student_work_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        RESEARCH_LINE_STUDENT_WORK
            .add(&self.pool, id, student_work_id, created_by, None)
            .await
    }

    async fn remove_student_work(
        &self,
        id: i64,
        student_work_id: i64,
    ) -> Result<bool, DomainError> {
        RESEARCH_LINE_STUDENT_WORK
            .remove(&self.pool, id, student_work_id)
            .await
    }
}
