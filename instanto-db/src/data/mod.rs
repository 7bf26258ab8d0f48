pub mod article_repository;
pub mod category_repository;
pub mod financed_project_repository;
pub mod funding_body_repository;
pub mod member_repository;
pub mod newspaper_repository;
pub mod partner_repository;
pub mod publication_repository;
pub mod publication_type_repository;
pub mod publisher_repository;
pub mod repositories;
pub mod research_area_repository;
pub mod research_line_repository;
pub mod status_repository;
pub mod student_work_repository;
pub mod student_work_type_repository;
pub mod ugroup_repository;
pub mod user_repository;
