use crate::data::status_repository::StatusRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::status::{Status, StatusInput};

pub struct StatusService<R: StatusRepository> {
    repo: R,
}

impl<R: StatusRepository> StatusService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &StatusInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StatusInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Status, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("status id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Status>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Status::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
