pub mod article;
pub mod category;
pub mod error;
pub mod financed_project;
pub mod funding_body;
pub mod link;
pub mod member;
pub mod newspaper;
pub mod order;
pub mod partner;
pub mod publication;
pub mod publication_type;
pub mod publisher;
pub mod research_area;
pub mod research_line;
pub mod status;
pub mod student_work;
pub mod student_work_type;
pub mod ugroup;
pub mod user;
pub mod validation;
