//! MySQL implementations of the repository traits.

mod association;
mod associations;
pub mod classify;
mod common;

mod article_repository;
mod category_repository;
mod financed_project_repository;
mod funding_body_repository;
mod member_repository;
mod newspaper_repository;
mod partner_repository;
mod publication_repository;
mod publication_type_repository;
mod publisher_repository;
mod research_area_repository;
mod research_line_repository;
mod status_repository;
mod student_work_repository;
mod student_work_type_repository;
mod ugroup_repository;
mod user_repository;

pub use article_repository::MySqlArticleRepository;
pub use category_repository::MySqlCategoryRepository;
pub use financed_project_repository::MySqlFinancedProjectRepository;
pub use funding_body_repository::MySqlFundingBodyRepository;
pub use member_repository::MySqlMemberRepository;
pub use newspaper_repository::MySqlNewspaperRepository;
pub use partner_repository::MySqlPartnerRepository;
pub use publication_repository::MySqlPublicationRepository;
pub use publication_type_repository::MySqlPublicationTypeRepository;
pub use publisher_repository::MySqlPublisherRepository;
pub use research_area_repository::MySqlResearchAreaRepository;
pub use research_line_repository::MySqlResearchLineRepository;
pub use status_repository::MySqlStatusRepository;
pub use student_work_repository::MySqlStudentWorkRepository;
pub use student_work_type_repository::MySqlStudentWorkTypeRepository;
pub use ugroup_repository::MySqlUGroupRepository;
pub use user_repository::MySqlUserRepository;
