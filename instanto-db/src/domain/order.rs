use super::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A caller-supplied ordering, checked against an entity's column list so it
/// can be spliced into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    clauses: Vec<(&'static str, Direction)>,
}

impl OrderBy {
    /// Parses `"<column> <asc|desc>[,<column> <asc|desc>...]"`.
    pub fn parse(raw: &str, allowed_columns: &[&'static str]) -> Result<Self, ValidationError> {
        let bad_order = || ValidationError::new("order", "bad order query");

        let mut clauses = Vec::new();
        for clause in raw.split(',') {
            let parts: Vec<&str> = clause.trim().split(' ').collect();
            let [column, direction] = parts.as_slice() else {
                return Err(bad_order());
            };
            let direction = match *direction {
                "asc" => Direction::Asc,
                "desc" => Direction::Desc,
                _ => return Err(bad_order()),
            };
            let column = allowed_columns
                .iter()
                .copied()
                .find(|allowed| allowed == column)
                .ok_or_else(bad_order)?;
            clauses.push((column, direction));
        }

        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[(&'static str, Direction)] {
        &self.clauses
    }

    /// Renders the `ORDER BY` clause including the keyword.
    pub fn to_sql(&self) -> String {
        let rendered: Vec<String> = self
            .clauses
            .iter()
            .map(|(column, direction)| format!("{column} {}", direction.as_sql()))
            .collect();
        format!(" ORDER BY {}", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, OrderBy};

    const COLUMNS: &[&str] = &["id", "title", "date"];

    #[test]
    fn parses_multiple_clauses() {
        let order = OrderBy::parse("date desc,title asc", COLUMNS).expect("must parse");
        assert_eq!(
            order.clauses(),
            &[("date", Direction::Desc), ("title", Direction::Asc)]
        );
        assert_eq!(order.to_sql(), " ORDER BY date DESC, title ASC");
    }

    #[test]
    fn tolerates_space_after_comma() {
        let order = OrderBy::parse("date desc, id asc", COLUMNS).expect("must parse");
        assert_eq!(order.clauses().len(), 2);
    }

    #[test]
    fn rejects_unknown_column() {
        let err = OrderBy::parse("password asc", COLUMNS).expect_err("must fail");
        assert_eq!(err.field, "order");
        assert_eq!(err.reason, "bad order query");
    }

    #[test]
    fn rejects_bad_direction_and_shape() {
        for raw in ["title up", "title", "title asc extra", "", "title ASC", "title asc;drop"] {
            assert!(OrderBy::parse(raw, COLUMNS).is_err(), "{raw:?} must be rejected");
        }
    }
}
