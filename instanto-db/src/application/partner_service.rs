use crate::data::partner_repository::PartnerRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::partner::{Partner, PartnerInput};
use crate::domain::validation::validate_logo;

pub struct PartnerService<R: PartnerRepository> {
    repo: R,
}

impl<R: PartnerRepository> PartnerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &PartnerInput, created_by: &str) -> Result<i64, DomainError> {
        input.validate()?;
        self.repo.create(input, created_by).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &PartnerInput,
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

    pub async fn get(&self, id: i64) -> Result<Partner, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("partner id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Partner>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, Partner::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
