pub mod article_service;
pub mod auth_service;
pub mod category_service;
pub mod financed_project_service;
pub mod funding_body_service;
pub mod member_service;
pub mod newspaper_service;
pub mod partner_service;
pub mod publication_service;
pub mod publication_type_service;
pub mod publisher_service;
pub mod research_area_service;
pub mod research_line_service;
pub mod status_service;
pub mod student_work_service;
pub mod student_work_type_service;
pub mod ugroup_service;
