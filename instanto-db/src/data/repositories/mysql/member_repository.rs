use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{
    FINANCED_PROJECT_LEADER, FINANCED_PROJECT_MEMBER, MEMBER_FINANCED_PROJECT,
    MEMBER_FINANCED_PROJECT_AS_LEADER, MEMBER_PARTNER, MEMBER_PUBLICATION, MEMBER_RESEARCH_LINE,
    MEMBER_STATUS, PARTNER_MEMBER, PUBLICATION_MEMBER, RESEARCH_LINE_MEMBER, STATUS_MEMBER,
};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists, update_text_column,
};
use crate::data::member_repository::MemberRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::member::{Member, MemberInput};
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlMemberRepository {
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn create(&self, input: &MemberInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO member (
                first_name, last_name, degree, year_in, year_out, email,
                created_by, updated_by, created_at, updated_at, primary_status
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.degree)
        .bind(input.year_in)
        .bind(input.year_out)
        .bind(&input.email)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .bind(input.primary_status)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &MemberInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE member
            SET first_name = ?, last_name = ?, degree = ?, year_in = ?, year_out = ?, email = ?,
                updated_by = ?, updated_at = ?, primary_status = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.degree)
        .bind(input.year_in)
        .bind(input.year_out)
        .bind(&input.email)
        .bind(updated_by)
        .bind(now_ts())
        .bind(input.primary_status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_cv(&self, id: i64, cv: &str, updated_by: &str) -> Result<u64, DomainError> {
        update_text_column(&self.pool, Member::TABLE, "cv", id, cv, updated_by).await
    }

    async fn update_photo(
        &self,
        id: i64,
        photo: &str,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        update_text_column(&self.pool, Member::TABLE, "photo", id, photo, updated_by).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Member::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Member>, DomainError> {
        fetch_by_id(&self.pool, Member::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Member>, DomainError> {
        fetch_all(&self.pool, Member::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Member::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Member::TABLE, id).await
    }

    async fn by_primary_status(&self, status_id: i64) -> Result<Vec<Member>, DomainError> {
        fetch_by_column(&self.pool, Member::TABLE, "primary_status", status_id).await
    }

    async fn by_status(&self, status_id: i64) -> Result<Vec<Linked<Member>>, DomainError> {
        STATUS_MEMBER.list_targets(&self.pool, status_id).await
    }

    async fn by_partner(&self, partner_id: i64) -> Result<Vec<Linked<Member>>, DomainError> {
        PARTNER_MEMBER.list_targets(&self.pool, partner_id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError> {
        RESEARCH_LINE_MEMBER
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn by_financed_project_as_leader(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError> {
        FINANCED_PROJECT_LEADER
            .list_targets(&self.pool, financed_project_id)
            .await
    }

    async fn by_financed_project(
        &self,
        financed_project_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError> {
        FINANCED_PROJECT_MEMBER
            .list_targets(&self.pool, financed_project_id)
            .await
    }

    async fn by_publication(
        &self,
        publication_id: i64,
    ) -> Result<Vec<Linked<Member>>, DomainError> {
        PUBLICATION_MEMBER
            .list_targets(&self.pool, publication_id)
            .await
    }

    async fn add_status(
        &self,
        id: i64,
        status_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_STATUS
            .add(&self.pool, id, status_id, created_by, None)
            .await
    }

    async fn remove_status(&self, id: i64, status_id: i64) -> Result<bool, DomainError> {
        MEMBER_STATUS.remove(&self.pool, id, status_id).await
    }

    async fn add_partner(
        &self,
        id: i64,
        partner_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_PARTNER
            .add(&self.pool, id, partner_id, created_by, None)
            .await
    }

    async fn remove_partner(&self, id: i64, partner_id: i64) -> Result<bool, DomainError> {
        MEMBER_PARTNER.remove(&self.pool, id, partner_id).await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        MEMBER_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }

    async fn add_financed_project_as_leader(
        &self,
        id: i64,
        financed_project_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_FINANCED_PROJECT_AS_LEADER
            .add(&self.pool, id, financed_project_id, created_by, None)
            .await
    }

    async fn remove_financed_project_as_leader(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError> {
        MEMBER_FINANCED_PROJECT_AS_LEADER
            .remove(&self.pool, id, financed_project_id)
            .await
    }

    async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_FINANCED_PROJECT
            .add(&self.pool, id, financed_project_id, created_by, None)
            .await
    }

    async fn remove_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
    ) -> Result<bool, DomainError> {
        MEMBER_FINANCED_PROJECT
            .remove(&self.pool, id, financed_project_id)
            .await
    }

    async fn add_publication(
        &self,
        id: i64,
        publication_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        MEMBER_PUBLICATION
            .add(&self.pool, id, publication_id, created_by, None)
            .await
    }

    async fn remove_publication(&self, id: i64, publication_id: i64) -> Result<bool, DomainError> {
        MEMBER_PUBLICATION
            .remove(&self.pool, id, publication_id)
            .await
    }
}
