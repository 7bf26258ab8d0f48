use crate::data::ugroup_repository::UGroupRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::ugroup::{UGroup, UGroupInput, validate_display_name};

pub struct UGroupService<R: UGroupRepository> {
    repo: R,
}

impl<R: UGroupRepository> UGroupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn create(&self, input: &UGroupInput) -> Result<(), DomainError> {
        input.validate()?;
        self.repo.create(input).await
    }

    /// The id is the key users refer to, so only the display name changes.
    pub async fn update_display_name(
        &self,
        id: &str,
        display_name: &str,
    ) -> Result<u64, DomainError> {
        validate_display_name(display_name)?;
        self.repo.update_display_name(id, display_name).await
    }

    pub async fn get(&self, id: &str) -> Result<UGroup, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("ugroup id: {id}")))
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<UGroup>, DomainError> {
        let order = order
            .map(|raw| OrderBy::parse(raw, UGroup::COLUMNS))
            .transpose()?;
        self.repo.list(order.as_ref()).await
    }
}
