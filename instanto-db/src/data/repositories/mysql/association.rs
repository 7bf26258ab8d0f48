//! Many-to-many link tables. Every table is described twice, once from each
//! side, so `add`/`remove` always take the owner id first and listings return
//! the rows on the other side together with the link audit.

use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySql, MySqlPool, Transaction};

use super::common::{map_db_error, map_sqlx_error, now_ts};
use crate::domain::error::{DomainError, ValidationError};
use crate::domain::funding_body::validate_record;
use crate::domain::link::{Link, Linked};

/// Which side of the link identifies the row holding the primary reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GuardedRow {
    Owner,
    Target,
}

/// Rejects secondary links that duplicate a row's primary reference, e.g. a
/// funding body that is already the project's `primary_funding_body`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrimaryGuard {
    pub(crate) table: &'static str,
    pub(crate) column: &'static str,
    pub(crate) row: GuardedRow,
    pub(crate) reason: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Association {
    pub(crate) table: &'static str,
    pub(crate) owner_column: &'static str,
    pub(crate) target_column: &'static str,
    pub(crate) target_table: &'static str,
    /// Field reported in validation errors.
    pub(crate) field: &'static str,
    pub(crate) duplicate_reason: &'static str,
    /// Prefix of the link fields on listed rows.
    pub(crate) relation: &'static str,
    /// Funding links also store a record reference and update audit.
    pub(crate) recorded: bool,
    pub(crate) primary_guard: Option<PrimaryGuard>,
}

impl Association {
    /// A plain link whose target table and reported field are both named
    /// after `target_column`, listed under the owner's name.
    pub(crate) const fn new(
        table: &'static str,
        owner_column: &'static str,
        target_column: &'static str,
        duplicate_reason: &'static str,
    ) -> Self {
        Self {
            table,
            owner_column,
            target_column,
            target_table: target_column,
            field: target_column,
            duplicate_reason,
            relation: owner_column,
            recorded: false,
            primary_guard: None,
        }
    }

    pub(crate) const fn field(self, field: &'static str) -> Self {
        Self { field, ..self }
    }

    pub(crate) const fn relation(self, relation: &'static str) -> Self {
        Self { relation, ..self }
    }

    pub(crate) const fn recorded(self) -> Self {
        Self {
            recorded: true,
            ..self
        }
    }

    pub(crate) const fn guarded(self, guard: PrimaryGuard) -> Self {
        Self {
            primary_guard: Some(guard),
            ..self
        }
    }

    /// Inserts the link. With a primary guard the guarded row is locked for
    /// the rest of the transaction, so a concurrent update of the primary
    /// column cannot slip in between the check and the insert.
    pub(crate) async fn add(
        &self,
        pool: &MySqlPool,
        owner_id: i64,
        target_id: i64,
        created_by: &str,
        record: Option<&str>,
    ) -> Result<(), DomainError> {
        let record = self.checked_record(record)?;
        let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

        if let Some(guard) = &self.primary_guard {
            guard.check(&mut tx, self.field, owner_id, target_id).await?;
        }

        let now = now_ts();
        let sql = if self.recorded {
            format!(
                "INSERT INTO {} ({}, {}, record, created_by, updated_by, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                self.table, self.owner_column, self.target_column
            )
        } else {
            format!(
                "INSERT INTO {} ({}, {}, created_by, created_at) VALUES (?, ?, ?, ?)",
                self.table, self.owner_column, self.target_column
            )
        };

        let query = sqlx::query(&sql).bind(owner_id).bind(target_id);
        let query = if self.recorded {
            query
                .bind(record)
                .bind(created_by)
                .bind(created_by)
                .bind(now)
                .bind(now)
        } else {
            query.bind(created_by).bind(now)
        };

        query
            .execute(&mut *tx)
            .await
            .map_err(|err| map_db_error(err, Some((self.field, self.duplicate_reason))))?;

        tx.commit().await.map_err(map_sqlx_error)
    }

    /// Record reference stored with the link. Only recorded links keep one,
    /// and theirs must pass [`validate_record`].
    fn checked_record<'a>(&self, record: Option<&'a str>) -> Result<&'a str, ValidationError> {
        let record = record.unwrap_or_default();
        if self.recorded {
            validate_record(record)?;
        }
        Ok(record)
    }

    /// Returns whether a link was deleted.
    pub(crate) async fn remove(
        &self,
        pool: &MySqlPool,
        owner_id: i64,
        target_id: i64,
    ) -> Result<bool, DomainError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND {} = ?",
            self.table, self.owner_column, self.target_column
        );
        let result = sqlx::query(&sql)
            .bind(owner_id)
            .bind(target_id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }

    /// Target rows linked to `owner_id`.
    pub(crate) async fn list_targets<T>(
        &self,
        pool: &MySqlPool,
        owner_id: i64,
    ) -> Result<Vec<Linked<T>>, DomainError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let rows = sqlx::query_as::<_, LinkedRow<T>>(&self.list_sql())
            .bind(owner_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_linked(self.relation)).collect())
    }

    fn list_sql(&self) -> String {
        let link = self.table;
        let target = self.target_table;
        let recorded = if self.recorded {
            format!(
                ", {link}.record AS link_record, {link}.updated_by AS link_updated_by, \
                 {link}.updated_at AS link_updated_at"
            )
        } else {
            String::new()
        };
        format!(
            "SELECT {target}.*, {link}.created_by AS link_created_by, \
             {link}.created_at AS link_created_at{recorded} \
             FROM {link} INNER JOIN {target} ON {link}.{} = {target}.id \
             WHERE {link}.{} = ?",
            self.target_column, self.owner_column
        )
    }
}

impl PrimaryGuard {
    async fn check(
        &self,
        tx: &mut Transaction<'_, MySql>,
        field: &str,
        owner_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError> {
        let (row_id, candidate) = match self.row {
            GuardedRow::Owner => (owner_id, target_id),
            GuardedRow::Target => (target_id, owner_id),
        };

        let sql = format!("SELECT {} FROM {} WHERE id = ? FOR UPDATE", self.column, self.table);
        let primary = sqlx::query_scalar::<_, i64>(&sql)
            .bind(row_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| DomainError::NotFound(format!("{} id: {row_id}", self.table)))?;

        ensure_not_primary(field, self.reason, primary, candidate)?;
        Ok(())
    }
}

fn ensure_not_primary(
    field: &str,
    reason: &str,
    primary: i64,
    candidate: i64,
) -> Result<(), ValidationError> {
    if primary == candidate {
        return Err(ValidationError::new(field, reason));
    }
    Ok(())
}

#[derive(sqlx::FromRow)]
struct LinkColumns {
    #[sqlx(rename = "link_created_by")]
    created_by: String,
    #[sqlx(rename = "link_created_at")]
    created_at: i64,
    #[sqlx(rename = "link_record", default)]
    record: Option<String>,
    #[sqlx(rename = "link_updated_by", default)]
    updated_by: Option<String>,
    #[sqlx(rename = "link_updated_at", default)]
    updated_at: Option<i64>,
}

/// A target row plus the aliased `link_*` columns of the join.
struct LinkedRow<T> {
    item: T,
    link: LinkColumns,
}

impl<'r, T> FromRow<'r, MySqlRow> for LinkedRow<T>
where
    T: FromRow<'r, MySqlRow>,
{
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            item: T::from_row(row)?,
            link: LinkColumns::from_row(row)?,
        })
    }
}

impl<T> LinkedRow<T> {
    fn into_linked(self, relation: &'static str) -> Linked<T> {
        Linked {
            item: self.item,
            link: Link {
                relation,
                created_by: self.link.created_by,
                created_at: self.link.created_at,
                record: self.link.record,
                updated_by: self.link.updated_by,
                updated_at: self.link.updated_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Association, GuardedRow, PrimaryGuard, ensure_not_primary};

    const FUNDING: Association = Association::new(
        "funding_body_financed_project",
        "financed_project",
        "funding_body",
        "this funding body has already been added",
    )
    .recorded()
    .relation("financed_project")
    .guarded(PrimaryGuard {
        table: "financed_project",
        column: "primary_funding_body",
        row: GuardedRow::Owner,
        reason: "this funding body is already the primary",
    });

    #[test]
    fn matching_primary_is_rejected() {
        let err = ensure_not_primary("leader", "this leader is already the primary", 4, 4)
            .expect_err("must be rejected");
        assert_eq!(err.field, "leader");
        assert_eq!(err.reason, "this leader is already the primary");
        assert!(ensure_not_primary("leader", "x", 4, 5).is_ok());
    }

    #[test]
    fn plain_link_lists_only_creation_audit() {
        let link = Association::new(
            "research_line_article",
            "article",
            "research_line",
            "this research line has already been added",
        );
        assert_eq!(
            link.list_sql(),
            "SELECT research_line.*, research_line_article.created_by AS link_created_by, \
             research_line_article.created_at AS link_created_at \
             FROM research_line_article INNER JOIN research_line \
             ON research_line_article.research_line = research_line.id \
             WHERE research_line_article.article = ?"
        );
        assert_eq!(link.relation, "article");
        assert_eq!(link.field, "research_line");
    }

    #[test]
    fn recorded_link_lists_record_and_update_audit() {
        let sql = FUNDING.list_sql();
        assert!(sql.contains("funding_body_financed_project.record AS link_record"));
        assert!(sql.contains("funding_body_financed_project.updated_at AS link_updated_at"));
        assert!(sql.contains("INNER JOIN funding_body ON"));
    }

    #[test]
    fn oversized_record_is_rejected_before_touching_the_database() {
        let err = FUNDING
            .checked_record(Some("r".repeat(201).as_str()))
            .expect_err("must be rejected");
        assert_eq!(err.field, "record");
        assert_eq!(err.reason, "length cannot be greater than 200");

        assert_eq!(FUNDING.checked_record(Some("TIN2013-1234")).expect("valid"), "TIN2013-1234");
        assert_eq!(FUNDING.checked_record(None).expect("empty is allowed"), "");
    }

    #[test]
    fn plain_links_ignore_the_record() {
        let plain = Association::new(
            "research_line_article",
            "article",
            "research_line",
            "this research line has already been added",
        );
        let long = "r".repeat(201);
        assert_eq!(plain.checked_record(Some(long.as_str())).expect("not checked"), long);
    }

    #[test]
    fn builder_keeps_other_fields() {
        let leader = Association::new(
            "financed_project_leader",
            "financed_project",
            "member",
            "this leader has already been added",
        )
        .field("leader");
        assert_eq!(leader.target_table, "member");
        assert_eq!(leader.field, "leader");
        assert!(!leader.recorded);
        assert!(leader.primary_guard.is_none());
        assert!(FUNDING.primary_guard.is_some());
    }
}
