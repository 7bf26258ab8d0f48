use async_trait::async_trait;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool};

use super::associations::{
    MEMBER_PUBLICATION, PUBLICATION_MEMBER, PUBLICATION_RESEARCH_LINE, RESEARCH_LINE_PUBLICATION,
};
use super::common::{
    count_rows, delete_by_id, fetch_all, fetch_by_column, fetch_by_id, insert_id, map_sqlx_error,
    now_ts, row_exists,
};
use crate::data::publication_repository::PublicationRepository;
use crate::domain::error::DomainError;
use crate::domain::link::Linked;
use crate::domain::order::OrderBy;
use crate::domain::publication::{Publication, PublicationInput};

const INSERT_SQL: &str = r#"
    INSERT INTO publication (
        title, year, book_title, chapter, city, country, conference_name, edition,
        institution, isbn, issn, journal, language, nationality, number, organization,
        pages, school, series, volume,
        created_by, updated_by, created_at, updated_at, publication_type, publisher, primary_author
    )
    VALUES (
        ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
        ?, ?, ?, ?, ?, ?, ?
    )
"#;

const UPDATE_SQL: &str = r#"
    UPDATE publication
    SET title = ?, year = ?, book_title = ?, chapter = ?, city = ?, country = ?,
        conference_name = ?, edition = ?, institution = ?, isbn = ?, issn = ?, journal = ?,
        language = ?, nationality = ?, number = ?, organization = ?, pages = ?, school = ?,
        series = ?, volume = ?,
        updated_by = ?, updated_at = ?, publication_type = ?, publisher = ?, primary_author = ?
    WHERE id = ?
"#;

/// Binds the bibliographic columns in the order both statements list them.
fn bind_fields<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    input: &'q PublicationInput,
) -> Query<'q, MySql, MySqlArguments> {
    query
        .bind(&input.title)
        .bind(input.year)
        .bind(&input.book_title)
        .bind(&input.chapter)
        .bind(&input.city)
        .bind(&input.country)
        .bind(&input.conference_name)
        .bind(&input.edition)
        .bind(&input.institution)
        .bind(&input.isbn)
        .bind(&input.issn)
        .bind(&input.journal)
        .bind(&input.language)
        .bind(&input.nationality)
        .bind(&input.number)
        .bind(&input.organization)
        .bind(&input.pages)
        .bind(&input.school)
        .bind(&input.series)
        .bind(&input.volume)
}

#[derive(Debug, Clone)]
pub struct MySqlPublicationRepository {
    pool: MySqlPool,
}

impl MySqlPublicationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicationRepository for MySqlPublicationRepository {
    async fn create(&self, input: &PublicationInput, created_by: &str) -> Result<i64, DomainError> {
        let now = now_ts();
        let result = bind_fields(sqlx::query(INSERT_SQL), input)
            .bind(created_by)
            .bind(created_by)
            .bind(now)
            .bind(now)
            .bind(input.publication_type)
            .bind(input.publisher)
            .bind(input.primary_author)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        insert_id(result.last_insert_id())
    }

    async fn update(
        &self,
        id: i64,
        input: &PublicationInput,
        updated_by: &str,
    ) -> Result<u64, DomainError> {
        let result = bind_fields(sqlx::query(UPDATE_SQL), input)
            .bind(updated_by)
            .bind(now_ts())
            .bind(input.publication_type)
            .bind(input.publisher)
            .bind(input.primary_author)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        delete_by_id(&self.pool, Publication::TABLE, id).await
    }

    async fn get(&self, id: i64) -> Result<Option<Publication>, DomainError> {
        fetch_by_id(&self.pool, Publication::TABLE, id).await
    }

    async fn list(&self, order: Option<&OrderBy>) -> Result<Vec<Publication>, DomainError> {
        fetch_all(&self.pool, Publication::TABLE, order).await
    }

    async fn count(&self) -> Result<i64, DomainError> {
        count_rows(&self.pool, Publication::TABLE).await
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        row_exists(&self.pool, Publication::TABLE, id).await
    }

    async fn by_publication_type(
        &self,
        publication_type_id: i64,
    ) -> Result<Vec<Publication>, DomainError> {
        fetch_by_column(
            &self.pool,
            Publication::TABLE,
            "publication_type",
            publication_type_id,
        )
        .await
    }

    async fn by_publisher(&self, publisher_id: i64) -> Result<Vec<Publication>, DomainError> {
        fetch_by_column(&self.pool, Publication::TABLE, "publisher", publisher_id).await
    }

    async fn by_primary_author(&self, member_id: i64) -> Result<Vec<Publication>, DomainError> {
        fetch_by_column(&self.pool, Publication::TABLE, "primary_author", member_id).await
    }

    async fn by_member(&self, member_id: i64) -> Result<Vec<Linked<Publication>>, DomainError> {
        MEMBER_PUBLICATION.list_targets(&self.pool, member_id).await
    }

    async fn by_research_line(
        &self,
        research_line_id: i64,
    ) -> Result<Vec<Linked<Publication>>, DomainError> {
        RESEARCH_LINE_PUBLICATION
            .list_targets(&self.pool, research_line_id)
            .await
    }

    async fn add_member(
        &self,
        id: i64,
        member_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        PUBLICATION_MEMBER
            .add(&self.pool, id, member_id, created_by, None)
            .await
    }

    async fn remove_member(&self, id: i64, member_id: i64) -> Result<bool, DomainError> {
        PUBLICATION_MEMBER.remove(&self.pool, id, member_id).await
    }

    async fn add_research_line(
        &self,
        id: i64,
        research_line_id: i64,
        created_by: &str,
    ) -> Result<(), DomainError> {
        PUBLICATION_RESEARCH_LINE
            .add(&self.pool, id, research_line_id, created_by, None)
            .await
    }

    async fn remove_research_line(
        &self,
        id: i64,
        research_line_id: i64,
    ) -> Result<bool, DomainError> {
        PUBLICATION_RESEARCH_LINE
            .remove(&self.pool, id, research_line_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{INSERT_SQL, UPDATE_SQL};

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn statements_bind_every_column() {
        // 20 bibliographic fields, 4 audit columns, 3 references.
        assert_eq!(placeholders(INSERT_SQL), 27);
        // Same minus created_by/created_at, plus the id.
        assert_eq!(placeholders(UPDATE_SQL), 26);
    }
}
