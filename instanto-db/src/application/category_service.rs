use crate::data::category_repository::CategoryRepository;
use crate::domain::category::{Category, CategoryInput};
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;

pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &CategoryInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &CategoryInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Category, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("category id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Category>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Category::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
