use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_is_number, validate_optional_text, validate_required_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub book_title: String,
    pub chapter: String,
    pub city: String,
    pub country: String,
    pub conference_name: String,
    pub edition: String,
    pub institution: String,
    pub isbn: String,
    pub issn: String,
    pub journal: String,
    pub language: String,
    pub nationality: String,
    pub number: String,
    pub organization: String,
    pub pages: String,
    pub school: String,
    pub series: String,
    pub volume: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub publication_type: i64,
    pub publisher: i64,
    pub primary_author: i64,
}

impl Publication {
    pub const TABLE: &'static str = "publication";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "year",
        "book_title",
        "chapter",
        "city",
        "country",
        "conference_name",
        "edition",
        "institution",
        "isbn",
        "issn",
        "journal",
        "language",
        "nationality",
        "number",
        "organization",
        "pages",
        "school",
        "series",
        "volume",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
        "publication_type",
        "publisher",
        "primary_author",
    ];
}

/// Bibliographic fields are free text; most of them stay empty for any
/// given publication type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationInput {
    pub title: String,
    pub year: i64,
    pub book_title: String,
    pub chapter: String,
    pub city: String,
    pub country: String,
    pub conference_name: String,
    pub edition: String,
    pub institution: String,
    pub isbn: String,
    pub issn: String,
    pub journal: String,
    pub language: String,
    pub nationality: String,
    pub number: String,
    pub organization: String,
    pub pages: String,
    pub school: String,
    pub series: String,
    pub volume: String,
    pub publication_type: i64,
    pub publisher: i64,
    /// Member listed first among the authors.
    pub primary_author: i64,
}

impl PublicationInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("title", &self.title)?;
        validate_is_number("year", self.year)?;
        for (field, value) in self.text_fields() {
            validate_optional_text(field, value)?;
        }
        Ok(())
    }

    fn text_fields(&self) -> [(&'static str, &str); 18] {
        [
            ("book_title", &self.book_title),
            ("chapter", &self.chapter),
            ("city", &self.city),
            ("country", &self.country),
            ("conference_name", &self.conference_name),
            ("edition", &self.edition),
            ("institution", &self.institution),
            ("isbn", &self.isbn),
            ("issn", &self.issn),
            ("journal", &self.journal),
            ("language", &self.language),
            ("nationality", &self.nationality),
            ("number", &self.number),
            ("organization", &self.organization),
            ("pages", &self.pages),
            ("school", &self.school),
            ("series", &self.series),
            ("volume", &self.volume),
        ]
    }
}
