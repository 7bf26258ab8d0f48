use crate::data::article_repository::ArticleRepository;
use crate::domain::article::{Article, ArticleInput};
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;

/// Validated writes for articles. Plain reads and link maintenance go through
/// [`ArticleService::repo`].
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &ArticleInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &ArticleInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Article, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article id: {id}")))
    }

    /// Lists every article, optionally ordered by a raw `"<column> <asc|desc>"` query.
    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Article>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Article::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::ArticleService;
    use crate::data::article_repository::ArticleRepository;
    use crate::domain::article::{Article, ArticleInput};
    use crate::domain::error::DomainError;
    use crate::domain::link::Linked;
    use crate::domain::order::{Direction, OrderBy};

    #[derive(Clone, Default)]
    struct FakeArticleRepo {
        calls: Arc<Mutex<Vec<&'static str>>>,
        list_order: Arc<Mutex<Option<OrderBy>>>,
        article_for_get: Arc<Mutex<Option<Article>>>,
    }

    impl FakeArticleRepo {
        fn record(&self, call: &'static str) {
            self.calls.lock().expect("calls mutex poisoned").push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().expect("calls mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl ArticleRepository for FakeArticleRepo {
        async fn create(&self, _input: &ArticleInput, _created_by: &str) -> Result<i64, DomainError> {
            self.record("create");
            Ok(7)
        }

        async fn update(
            &self,
            _id: i64,
            _input: &ArticleInput,
            _updated_by: &str,
        ) -> Result<u64, DomainError> {
            self.record("update");
            Ok(1)
        }

        async fn delete(&self, _id: i64) -> Result<u64, DomainError> {
            self.record("delete");
            Ok(1)
        }

        async fn get(&self, _id: i64) -> Result<Option<Article>, DomainError> {
            self.record("get");
            Ok(self
                .article_for_get
                .lock()
                .expect("article_for_get mutex poisoned")
                .clone())
        }

        async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Article>, DomainError> {
            self.record("list");
            *self.list_order.lock().expect("list_order mutex poisoned") = order.cloned();
            Ok(Vec::new())
        }

        async fn count(&self) -> Result<i64, DomainError> {
            self.record("count");
            Ok(0)
        }

        async fn exists(&self, _id: i64) -> Result<bool, DomainError> {
            self.record("exists");
            Ok(false)
        }

        async fn by_newspaper(&self, _newspaper_id: i64) -> Result<Vec<Article>, DomainError> {
            self.record("by_newspaper");
            Ok(Vec::new())
        }

        async fn by_research_line(
            &self,
            _research_line_id: i64,
        ) -> Result<Vec<Linked<Article>>, DomainError> {
            self.record("by_research_line");
            Ok(Vec::new())
        }

        async fn add_research_line(
            &self,
            _id: i64,
            _research_line_id: i64,
            _created_by: &str,
        ) -> Result<(), DomainError> {
            self.record("add_research_line");
            Ok(())
        }

        async fn remove_research_line(
            &self,
            _id: i64,
            _research_line_id: i64,
        ) -> Result<bool, DomainError> {
            self.record("remove_research_line");
            Ok(true)
        }
    }

    fn input() -> ArticleInput {
        ArticleInput {
            title: "Open day".to_string(),
            web: "https://example.org/open-day".to_string(),
            date: 1_400_000_000,
            newspaper: 1,
        }
    }

    #[tokio::test]
    async fn long_title_is_rejected_before_any_repository_call() {
        let repo = FakeArticleRepo::default();
        let service = ArticleService::new(repo.clone());

        let bad = ArticleInput {
            title: "t".repeat(201),
            ..input()
        };
        let err = service.create(&bad, "admin").await.expect_err("create must fail");

        let validation = err.as_validation().expect("must be a validation error");
        assert_eq!(validation.field, "title");
        assert_eq!(validation.reason, "length cannot be greater than 200");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_input_reaches_the_repository() {
        let repo = FakeArticleRepo::default();
        let service = ArticleService::new(repo.clone());

        let id = service.create(&input(), "admin").await.expect("create must succeed");
        assert_eq!(id, 7);

        let rows = service.update(7, &input(), "editor").await.expect("update must succeed");
        assert_eq!(rows, 1);
        assert_eq!(repo.calls(), vec!["create", "update"]);
    }

    #[tokio::test]
    async fn invalid_update_does_not_touch_the_repository() {
        let repo = FakeArticleRepo::default();
        let service = ArticleService::new(repo.clone());

        let bad = ArticleInput { date: -1, ..input() };
        let err = service.update(3, &bad, "editor").await.expect_err("update must fail");
        assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("date"));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn get_maps_missing_row_to_not_found() {
        let service = ArticleService::new(FakeArticleRepo::default());
        let err = service.get(42).await.expect_err("get must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_parses_order_against_article_columns() {
        let repo = FakeArticleRepo::default();
        let service = ArticleService::new(repo.clone());

        service.list(Some("date desc")).await.expect("list must succeed");
        let order = repo
            .list_order
            .lock()
            .expect("list_order mutex poisoned")
            .clone()
            .expect("order must be passed");
        assert_eq!(order.clauses(), &[("date", Direction::Desc)]);

        let err = service.list(Some("password asc")).await.expect_err("unknown column");
        assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("order"));
        assert_eq!(repo.calls(), vec!["list"]);
    }
}
