use serde::ser::{Serialize, SerializeMap, Serializer};

/// Audit data of an association row, reported next to the entity it links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Prefix of the serialized keys, e.g. `research_line` for
    /// `research_line_created_by`.
    pub relation: &'static str,
    pub created_by: String,
    pub created_at: i64,
    /// Only funding links carry these.
    pub record: Option<String>,
    pub updated_by: Option<String>,
    pub updated_at: Option<i64>,
}

/// Empty strings and zero timestamps are left out of the output.
impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let relation = self.relation;
        let mut map = serializer.serialize_map(None)?;
        if let Some(record) = non_empty(self.record.as_deref()) {
            map.serialize_entry(&format!("{relation}_record"), record)?;
        }
        if let Some(created_by) = non_empty(Some(&self.created_by)) {
            map.serialize_entry(&format!("{relation}_created_by"), created_by)?;
        }
        if let Some(updated_by) = non_empty(self.updated_by.as_deref()) {
            map.serialize_entry(&format!("{relation}_updated_by"), updated_by)?;
        }
        if let Some(created_at) = non_zero(Some(self.created_at)) {
            map.serialize_entry(&format!("{relation}_created_at"), &created_at)?;
        }
        if let Some(updated_at) = non_zero(self.updated_at) {
            map.serialize_entry(&format!("{relation}_updated_at"), &updated_at)?;
        }
        map.end()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|value| *value != 0)
}

/// An entity listed through an association table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(flatten)]
    pub link: Link,
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Link, Linked};

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Thing {
        id: i64,
        name: String,
    }

    #[test]
    fn linked_flattens_entity_and_prefixed_link_fields() {
        let linked = Linked {
            item: Thing {
                id: 3,
                name: "x".to_string(),
            },
            link: Link {
                relation: "research_line",
                created_by: "admin".to_string(),
                created_at: 1_700_000_000,
                record: None,
                updated_by: None,
                updated_at: None,
            },
        };

        let json = serde_json::to_value(&linked).expect("must serialize");
        assert_eq!(json["id"], 3);
        assert_eq!(json["research_line_created_by"], "admin");
        assert_eq!(json["research_line_created_at"], 1_700_000_000);
        assert!(json.get("research_line_record").is_none());
    }

    #[test]
    fn funding_link_includes_record_and_update_audit() {
        let link = Link {
            relation: "funding_body",
            created_by: "a".to_string(),
            created_at: 1,
            record: Some("REF-42".to_string()),
            updated_by: Some("b".to_string()),
            updated_at: Some(2),
        };

        let json = serde_json::to_value(&link).expect("must serialize");
        assert_eq!(json["funding_body_record"], "REF-42");
        assert_eq!(json["funding_body_updated_by"], "b");
        assert_eq!(json["funding_body_updated_at"], 2);
    }

    #[test]
    fn empty_audit_fields_are_omitted() {
        let link = Link {
            relation: "member",
            created_by: String::new(),
            created_at: 0,
            record: Some(String::new()),
            updated_by: Some(String::new()),
            updated_at: Some(0),
        };

        let json = serde_json::to_value(&link).expect("must serialize");
        assert_eq!(json, serde_json::json!({}));

        let link = Link {
            created_by: "editor".to_string(),
            ..link
        };
        let json = serde_json::to_value(&link).expect("must serialize");
        assert_eq!(json, serde_json::json!({ "member_created_by": "editor" }));
    }
}
