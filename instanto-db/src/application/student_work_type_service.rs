use crate::data::student_work_type_repository::StudentWorkTypeRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::student_work_type::{StudentWorkType, StudentWorkTypeInput};

pub struct StudentWorkTypeService<R: StudentWorkTypeRepository> {
    repo: R,
}

impl<R: StudentWorkTypeRepository> StudentWorkTypeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &StudentWorkTypeInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StudentWorkTypeInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<StudentWorkType, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("student_work_type id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<StudentWorkType>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, StudentWorkType::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
