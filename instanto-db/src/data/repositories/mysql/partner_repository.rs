use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{
    MEMBER_PARTNER, PARTNER_MEMBER, PARTNER_RESEARCH_LINE, RESEARCH_LINE_PARTNER,
};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_id, insert_id, map_sqlx_error, now_ts,
    row_exists, update_text_column,
};
use crate::data::partner_repository::PartnerRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::partner::{Partner, PartnerInput};

#[derive(Debug, Clone)]
pub struct MySqlPartnerRepository {
    pool: MySqlPool,
}

impl MySqlPartnerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for MySqlPartnerRepository {
    async fn create(&self, input: &PartnerInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO partner (
                name, web, same_department, scope,
                created_by, updated_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
        .bind(input.same_department)
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
        input: &PartnerInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE partner
            SET name = ?, web = ?, same_department = ?, scope = ?, updated_by = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.web)
        .bind(input.same_department)
        .bind(&input.scope)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_logo(&self, id: i64, logo: &str, updated_by: &str) -> Result<u64, DomainError> {
        update_text_column(&self.pool, Partner::TABLE, "logo", id, logo, updated_by).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Partner::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Partner>, DomainError> {
        fetch_by_id(&self.pool, Partner::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Partner>, DomainError> {
        fetch_all(&self.pool, Partner::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Partner::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Partner::TABLE, id).await
    }

    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<Partner>>, DomainError> {
        MEMBER_PARTNER.list_targets(&self.pool, member_id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Partner>>, DomainError> {
        RESEARCH_LINE_PARTNER
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_member(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        PARTNER_MEMBER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        PARTNER_MEMBER.remove(&self.pool, id, member_id).await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        PARTNER_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        PARTNER_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}
