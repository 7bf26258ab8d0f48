use crate::data::member_repository::MemberRepository;
use crate::domain::error::DomainError;
use crate::domain::member::{Member, MemberInput, validate_cv, validate_photo};
use crate::domain::order::OrderBy;

pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &MemberInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &MemberInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        input.validate()?;
        self.repo.update(id, input, updated_by).await
    }

    pub async fn update_cv(&self, id: i64, cv: &str, updated_by: &str) -> Result<u64, DomainError> {
        validate_cv(cv)?;
        self.repo.update_cv(id, cv, updated_by).await
    }

    pub async fn update_photo(
        &self,
        id: i64,
        photo: &str,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        validate_photo(photo)?;
        self.repo.update_photo(id, photo, updated_by).await
    }

    pub async fn get(&self, id: i64) -> Result<Member, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("member id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Member>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Member::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
