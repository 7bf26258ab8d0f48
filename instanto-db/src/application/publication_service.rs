use crate::data::publication_repository::PublicationRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publication::{Publication, PublicationInput};

pub struct PublicationService<R: PublicationRepository> {
    repo: R,
}

impl<R: PublicationRepository> PublicationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(
        &self,
        input: &PublicationInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &PublicationInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Publication, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("publication id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Publication>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Publication::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
