use crate::data::funding_body_repository::FundingBodyRepository;
use crate::domain::error::DomainError;
use crate::domain::funding_body::{FundingBody, FundingBodyInput, validate_record};
use crate::domain::order::OrderBy;

pub struct FundingBodyService<R: FundingBodyRepository> {
    repo: R,
}

impl<R: FundingBodyRepository> FundingBodyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(
        &self,
        input: &FundingBodyInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &FundingBodyInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    /// Links a project funded by this body under the given record reference.
    pub async fn add_financed_project(
        &self,
        id: i64,
        financed_project_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError> {
        validate_record(record)?;
        self.repo
            .add_financed_project(id, financed_project_id, record, created_by)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<FundingBody, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("funding_body id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<FundingBody>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, FundingBody::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
