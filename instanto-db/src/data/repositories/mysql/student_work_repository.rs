use async_trait::async_trait;
use sqlx::MySqlPool;

use super::associations::{RESEARCH_LINE_STUDENT_WORK, STUDENT_WORK_RESEARCH_LINE};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists,
};
use crate::data::student_work_repository::StudentWorkRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::student_work::{StudentWork, StudentWorkInput};

#[derive(Debug, Clone)]
pub struct MySqlStudentWorkRepository {
    pool: MySqlPool,
}

impl MySqlStudentWorkRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentWorkRepository for MySqlStudentWorkRepository {
    async fn create(&self, input: &StudentWorkInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = sqlx::query(
            r#"
            INSERT INTO student_work (
                title, year, school, volume,
                created_by, updated_by, created_at, updated_at, student_work_type, author
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(input.year)
        .bind(&input.school)
        .bind(&input.volume)
        .bind(created_by)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .bind(input.student_work_type)
        .bind(input.author)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &StudentWorkInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE student_work
            SET title = ?, year = ?, school = ?, volume = ?, updated_by = ?, updated_at = ?,
                student_work_type = ?, author = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(input.year)
        .bind(&input.school)
        .bind(&input.volume)
        .bind(updated_by)
        .bind(now_ts())
        .bind(input.student_work_type)
        .bind(input.author)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, StudentWork::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<StudentWork>, DomainError> {
        fetch_by_id(&self.pool, StudentWork::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<StudentWork>, DomainError> {
        fetch_all(&self.pool, StudentWork::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, StudentWork::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, StudentWork::TABLE, id).await
    }

    async fn by_student_work_type(
        &self,
        student_work_type_id: i64,
    ) -> Result<Vec<StudentWork>, DomainError> {
        fetch_by_column(
            &self.pool,
            StudentWork::TABLE,
            "student_work_type",
            student_work_type_id,
        )
        .await
    }

    async fn by_author(&self, member_id: i64) -> Result<Vec<StudentWork>, DomainError> {
        fetch_by_column(&self.pool, StudentWork::TABLE, "author", member_id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<StudentWork>>, DomainError> {
        RESEARCH_LINE_STUDENT_WORK
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        STUDENT_WORK_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        STUDENT_WORK_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}
