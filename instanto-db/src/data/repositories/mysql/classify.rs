//! Recognizes the MySQL constraint violations that map back to user input.
//!
//! Classification works on the `"Error <number>: <message>"` text MySQL
//! clients print, so the same two checks apply to any error source that
//! renders that form.

use sqlx::mysql::MySqlDatabaseError;

const DUPLICATE_ENTRY: &str = "Error 1062";
const NO_REFERENCED_ROW: &str = "Error 1452";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A unique index already holds this value.
    DuplicateKey,
    /// A foreign key points at a missing row. `field` is the referencing
    /// column as reported by the server; it may be empty if the message
    /// does not follow the usual layout.
    ForeignKey { field: String },
}

pub fn is_duplicate_key(message: &str) -> bool {
    message.contains(DUPLICATE_ENTRY)
}

/// Returns the column of a failed foreign key check, taken from the
/// ``FOREIGN KEY (`col`) REFERENCES`` part of the message.
pub fn foreign_key_violation(message: &str) -> Option<String> {
    if !message.contains(NO_REFERENCED_ROW) {
        return None;
    }
    Some(foreign_key_field(message).unwrap_or_default().to_string())
}

fn foreign_key_field(message: &str) -> Option<&str> {
    let start = message.find("FOREIGN KEY")? + 14;
    let end = message.find("REFERENCES")?.checked_sub(3)?;
    message.get(start..end)
}

pub fn classify(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    // The driver keeps the error number apart from the message text, e.g.
    // number() == 1452 and message() starting "Cannot add or update a child
    // row". Rebuilding the client form keeps one parser for both sources.
    // Covered against a live server by tests/mysql_smoke.rs.
    let message = match db_err.try_downcast_ref::<MySqlDatabaseError>() {
        Some(mysql_err) => format!("Error {}: {}", mysql_err.number(), mysql_err.message()),
        None => db_err.message().to_string(),
    };

    if is_duplicate_key(&message) {
        return Some(ConstraintViolation::DuplicateKey);
    }
    foreign_key_violation(&message).map(|field| ConstraintViolation::ForeignKey { field })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::{ConstraintViolation, classify, foreign_key_violation, is_duplicate_key};

    const FK_MESSAGE: &str = "Error 1452: Cannot add or update a child row: a foreign key \
        constraint fails (`instanto`.`article`, CONSTRAINT `article_ibfk_1` FOREIGN KEY \
        (`newspaper`) REFERENCES `newspaper` (`id`))";

    /// Database error carrying a pre-rendered message, for driving the
    /// classifier without a server.
    #[derive(Debug)]
    pub(crate) struct TextDbError(pub(crate) String);

    impl fmt::Display for TextDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl StdError for TextDbError {}

    impl DatabaseError for TextDbError {
        fn message(&self) -> &str {
            &self.0
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            None
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    pub(crate) fn db_error(message: &str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(TextDbError(message.to_string())))
    }

    #[test]
    fn duplicate_marker_is_detected() {
        assert!(is_duplicate_key(
            "Error 1062: Duplicate entry '1-2' for key 'research_line_article_pair'"
        ));
        assert!(!is_duplicate_key("Error 1452: something else"));
        assert!(!is_duplicate_key("connection reset by peer"));
    }

    #[test]
    fn foreign_key_column_is_extracted() {
        assert_eq!(foreign_key_violation(FK_MESSAGE), Some("newspaper".to_string()));
    }

    #[test]
    fn foreign_key_without_marker_is_none() {
        assert_eq!(foreign_key_violation("Error 1062: Duplicate entry"), None);
    }

    #[test]
    fn odd_foreign_key_messages_never_panic() {
        for message in [
            "Error 1452",
            "Error 1452: REFERENCES FOREIGN KEY",
            "Error 1452: FOREIGN KEY (`x`)",
            "Error 1452: REFERENCES",
            "Error 1452: FOREIGN KEY (`ñandú`) REFERENCES",
        ] {
            assert!(foreign_key_violation(message).is_some(), "{message}");
        }
        assert_eq!(foreign_key_violation("Error 1452"), Some(String::new()));
    }

    #[test]
    fn classify_reads_database_errors() {
        assert_eq!(
            classify(&db_error("Error 1062: Duplicate entry '3-4' for key 'pair'")),
            Some(ConstraintViolation::DuplicateKey)
        );
        assert_eq!(
            classify(&db_error(FK_MESSAGE)),
            Some(ConstraintViolation::ForeignKey {
                field: "newspaper".to_string()
            })
        );
        assert_eq!(classify(&db_error("Error 1213: Deadlock found")), None);
    }

    #[test]
    fn classify_ignores_non_database_errors() {
        assert_eq!(classify(&sqlx::Error::PoolTimedOut), None);
        assert_eq!(classify(&sqlx::Error::RowNotFound), None);
    }
}
