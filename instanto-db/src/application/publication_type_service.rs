use crate::data::publication_type_repository::PublicationTypeRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::publication_type::{PublicationType, PublicationTypeInput};

pub struct PublicationTypeService<R: PublicationTypeRepository> {
    repo: R,
}

impl<R: PublicationTypeRepository> PublicationTypeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &PublicationTypeInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &PublicationTypeInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<PublicationType, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("publication_type id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<PublicationType>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, PublicationType::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
