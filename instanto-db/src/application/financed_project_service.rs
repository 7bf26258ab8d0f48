use crate::data::financed_project_repository::FinancedProjectRepository;
use crate::domain::error::DomainError;
use crate::domain::financed_project::{FinancedProject, FinancedProjectInput};
use crate::domain::funding_body::validate_record;
use crate::domain::order::OrderBy;

pub struct FinancedProjectService<R: FinancedProjectRepository> {
    repo: R,
}

impl<R: FinancedProjectRepository> FinancedProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(
        &self,
        input: &FinancedProjectInput,
        created_by: &str,
    ) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &FinancedProjectInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    /// Adds a secondary funder under the given record reference.
    pub async fn add_funding_body(
        &self,
        id: i64,
        funding_body_id: i64,
        record: &str,
        created_by: &str,
    ) -> Result<(), DomainError> {
        validate_record(record)?;
        self.repo
            .add_funding_body(id, funding_body_id, record, created_by)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<FinancedProject, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("financed_project id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<FinancedProject>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, FinancedProject::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
