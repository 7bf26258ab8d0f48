use crate::data::newspaper_repository::NewspaperRepository;
use crate::domain::error::DomainError;
use crate::domain::newspaper::{Newspaper, NewspaperInput};
use crate::domain::order::OrderBy;
use crate::domain::validation::validate_logo;

pub struct NewspaperService<R: NewspaperRepository> {
    repo: R,
}

impl<R: NewspaperRepository> NewspaperService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(
        &self,
        input: &NewspaperInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &NewspaperInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn update_logo(
        &self,
        id: i64,
        logo: &str,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        validate_logo(logo)?;
        self.repo.update_logo(id, logo, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Newspaper, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("newspaper id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Newspaper>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Newspaper::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
