use crate::data::student_work_repository::StudentWorkRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::student_work::{StudentWork, StudentWorkInput};

pub struct StudentWorkService<R: StudentWorkRepository> {
    repo: R,
}

impl<R: StudentWorkRepository> StudentWorkService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &StudentWorkInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StudentWorkInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<StudentWork, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("student_work id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<StudentWork>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, StudentWork::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
