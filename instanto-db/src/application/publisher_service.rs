use crate::data::publisher_repository::PublisherRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publisher::{Publisher, PublisherInput};

pub struct PublisherService<R: PublisherRepository> {
    repo: R,
}

impl<R: PublisherRepository> PublisherService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &PublisherInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &PublisherInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Publisher, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("publisher id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Publisher>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Publisher::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
