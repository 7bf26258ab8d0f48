use async_trait::async_trait;

use crate::domain::article::{Article, ArticleInput};
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;

/// Storage for articles. Inputs are expected to be validated already; see
/// [`crate::application::article_service::ArticleService`].
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create(&self, input: &ArticleInput, created_by: &str) -> Result<i64, DomainError>;
    async fn update(&self, id: i64, input: &ArticleInput, updated_by: &str)
    -> Result<u64, DomainError>;
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<Article>, DomainError>;
    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Article>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    async fn by_newspaper(&self, newspaper_id: i64) -> Result<Vec<Article>, DomainError>;
    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Article>>, DomainError>;

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError>;
    async fn remove_research_line(&self, id: i64, research_line_id: i64)
    -> Result<bool, DomainError>;
}
