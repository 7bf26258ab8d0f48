use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{count_rows, fetch_all, map_db_error, map_sqlx_error};
use crate::data::ugroup_repository::UGroupRepository;
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;
use crate::domain::ugroup::{UGroup, UGroupInput};

const ID_TAKEN: (&str, &str) = ("id", "this id is taken, use another");

#[derive(Debug, Clone)]
pub struct MySqlUGroupRepository {
    pool: MySqlPool,
}

impl MySqlUGroupRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UGroupRepository for MySqlUGroupRepository {
    async fn create(&self, input: &UGroupInput) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO ugroup (id, display_name) VALUES (?, ?)")
            .bind(&input.id)
            .bind(&input.display_name)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error(err, Some(ID_TAKEN)))?;
        Ok(())
    }

    async fn update_display_name(
        &self,
        id: &str,
        display_name: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE ugroup SET display_name = ? WHERE id = ?")
            .bind(display_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM ugroup WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn get(&self, id: &str) -> Result<Option<UGroup>, DomainError> {
        sqlx::query_as::<_, UGroup>("SELECT id, display_name FROM ugroup WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<UGroup>, DomainError> {
        fetch_all(&self.pool, UGroup::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, UGroup::TABLE).await
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ugroup WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }
}
