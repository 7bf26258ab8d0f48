//! Data access for the research group site: newspapers and articles, funding
//! bodies and financed projects, members, statuses, partners, research areas
//! and research lines, publications and student works with their lookup
//! tables, plus the link tables between them, site users and user groups.
//!
//! Writes go through the services in [`application`], which validate input
//! before it reaches MySQL. Constraint violations reported by the server come
//! back as [`ValidationError`]s naming the offending field.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{DomainError, ValidationError};
pub use domain::link::{Link, Linked};
pub use domain::order::OrderBy;
