use async_trait::async_trait;
use sqlx::MySqlPool;

use super::common::{map_db_error, map_sqlx_error};
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User};

#[derive(Debug, Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO `user` (username, email, password, enabled, display_name, ugroup)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.enabled)
        .bind(&input.display_name)
        .bind(&input.ugroup)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            map_db_error(
                err,
                Some(("username", "this username is taken, use another")),
            )
        })?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, password, enabled, display_name, ugroup
            FROM `user`
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}
