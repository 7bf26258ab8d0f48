use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{ARTICLE_RESEARCH_LINE, RESEARCH_LINE_ARTICLE};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists,
};
use crate::data::article_repository::ArticleRepository;
use crate::domain::article::{Article, ArticleInput};
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

#[derive(Debug, Clone)]
pub struct MySqlArticleRepository {
    pool: MySqlPool,
}

impl MySqlArticleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for MySqlArticleRepository {
    async fn create(&self, input: &ArticleInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO article (title, web, date, created_by, updated_by, created_at, updated_at, newspaper)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.web)
        .bind(input.date)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .bind(input.newspaper)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &ArticleInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE article
            SET title = ?, web = ?, date = ?, updated_by = ?, updated_at = ?, newspaper = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.web)
        .bind(input.date)
        .bind(updated_by)
        .bind(now_ts())
        .bind(input.newspaper)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Article::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Article>, DomainError> {
        fetch_by_id(&self.pool, Article::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Article>, DomainError> {
        fetch_all(&self.pool, Article::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Article::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Article::TABLE, id).await
    }

    async fn by_newspaper(&self, newspaper_id: i64) -> Result<Vec<Article>, DomainError> {
        fetch_by_column(&self.pool, Article::TABLE, "newspaper", newspaper_id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Article>>, DomainError> {
        RESEARCH_LINE_ARTICLE
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        ARTICLE_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        ARTICLE_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}
