use std::time::{Duration, SystemTime, UNIX_EPOCH};

use instanto_db::DomainError;
use instanto_db::application::article_service::ArticleService;
use instanto_db::application::auth_service::AuthService;
use instanto_db::application::newspaper_service::NewspaperService;
use instanto_db::application::publication_service::PublicationService;
use instanto_db::application::ugroup_service::UGroupService;
use instanto_db::data::article_repository::ArticleRepository;
use instanto_db::data::member_repository::MemberRepository;
use instanto_db::data::publication_repository::PublicationRepository;
use instanto_db::data::publication_type_repository::PublicationTypeRepository;
use instanto_db::data::publisher_repository::PublisherRepository;
use instanto_db::data::repositories::mysql::classify::{ConstraintViolation, classify};
use instanto_db::data::repositories::mysql::{
    MySqlArticleRepository, MySqlMemberRepository, MySqlNewspaperRepository,
    MySqlPublicationRepository, MySqlPublicationTypeRepository, MySqlPublisherRepository,
    MySqlResearchAreaRepository, MySqlResearchLineRepository, MySqlStatusRepository,
    MySqlUGroupRepository, MySqlUserRepository,
};
use instanto_db::data::research_area_repository::ResearchAreaRepository;
use instanto_db::data::research_line_repository::ResearchLineRepository;
use instanto_db::data::status_repository::StatusRepository;
use instanto_db::data::ugroup_repository::UGroupRepository;
use instanto_db::domain::article::ArticleInput;
use instanto_db::domain::member::MemberInput;
use instanto_db::domain::newspaper::NewspaperInput;
use instanto_db::domain::publication::PublicationInput;
use instanto_db::domain::publication_type::PublicationTypeInput;
use instanto_db::domain::publisher::PublisherInput;
use instanto_db::domain::research_area::ResearchAreaInput;
use instanto_db::domain::research_line::ResearchLineInput;
use instanto_db::domain::status::StatusInput;
use instanto_db::domain::ugroup::UGroupInput;
use instanto_db::domain::user::NewUserInput;
use instanto_db::infrastructure::database::{create_pool, run_migrations};
use instanto_db::infrastructure::settings::DatabaseSettings;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlQueryResult;

const ACTOR: &str = "smoke";

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

async fn pool() -> MySqlPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_pool(&DatabaseSettings {
        url,
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
    })
    .await
    .expect("pool must be created");
    run_migrations(&pool).await.expect("migrations must apply");
    pool
}

async fn research_line(pool: &MySqlPool, suffix: &str) -> i64 {
    let area = MySqlResearchAreaRepository::new(pool.clone())
        .create(
            &ResearchAreaInput {
                name: format!("area {suffix}"),
            },
            ACTOR,
        )
        .await
        .expect("research area must be created");
    MySqlResearchLineRepository::new(pool.clone())
        .create(
            &ResearchLineInput {
                title: format!("line {suffix}"),
                finished: false,
                description: String::new(),
                primary_research_area: area,
            },
            ACTOR,
        )
        .await
        .expect("research line must be created")
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn article_flow_reports_constraint_violations_as_fields() {
    let pool = pool().await;
    let suffix = unique_suffix();

    let newspapers = NewspaperService::new(MySqlNewspaperRepository::new(pool.clone()));
    let newspaper = newspapers
        .create(
            &NewspaperInput {
                name: format!("paper {suffix}"),
                web: "https://paper.example".to_string(),
            },
            ACTOR,
        )
        .await
        .expect("newspaper must be created");

    let articles = ArticleService::new(MySqlArticleRepository::new(pool.clone()));
    let input = ArticleInput {
        title: format!("article {suffix}"),
        web: String::new(),
        date: 1_700_000_000,
        newspaper,
    };
    let article = articles
        .create(&input, ACTOR)
        .await
        .expect("article must be created");
    assert_eq!(articles.get(article).await.expect("must exist").newspaper, newspaper);

    let orphan = ArticleInput {
        newspaper: i64::MAX,
        ..input
    };
    let err = articles
        .create(&orphan, ACTOR)
        .await
        .expect_err("missing newspaper must fail");
    let validation = err.as_validation().expect("must be a validation error");
    assert_eq!(validation.field, "newspaper");
    assert_eq!(validation.reason, "not exist");

    let line = research_line(&pool, &suffix).await;
    articles
        .repo()
        .add_research_line(article, line, ACTOR)
        .await
        .expect("first link must succeed");
    let err = articles
        .repo()
        .add_research_line(article, line, ACTOR)
        .await
        .expect_err("second link must fail");
    let validation = err.as_validation().expect("must be a validation error");
    assert_eq!(validation.field, "research_line");
    assert_eq!(validation.reason, "this research line has already been added");

    let linked = articles
        .repo()
        .by_research_line(line)
        .await
        .expect("listing must succeed");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].item.id, article);
    assert_eq!(linked[0].link.created_by, ACTOR);

    assert!(
        articles
            .repo()
            .remove_research_line(article, line)
            .await
            .expect("remove must succeed")
    );
    assert_eq!(articles.repo().delete(article).await.expect("delete"), 1);
}

async fn status(pool: &MySqlPool, suffix: &str) -> i64 {
    MySqlStatusRepository::new(pool.clone())
        .create(
            &StatusInput {
                name: format!("status {suffix}"),
                description: String::new(),
            },
            ACTOR,
        )
        .await
        .expect("status must be created")
}

async fn member(pool: &MySqlPool, suffix: &str, status: i64) -> i64 {
    MySqlMemberRepository::new(pool.clone())
        .create(
            &MemberInput {
                first_name: "Ada".to_string(),
                last_name: format!("Lovelace {suffix}"),
                degree: "dra".to_string(),
                year_in: 2005,
                year_out: 0,
                email: String::new(),
                primary_status: status,
            },
            ACTOR,
        )
        .await
        .expect("member must be created")
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn primary_status_cannot_be_added_again() {
    let pool = pool().await;
    let suffix = unique_suffix();

    let status = status(&pool, &suffix).await;
    let members = MySqlMemberRepository::new(pool.clone());
    let member = member(&pool, &suffix, status).await;

    let err = members
        .add_status(member, status, ACTOR)
        .await
        .expect_err("primary status must be rejected");
    let validation = err.as_validation().expect("must be a validation error");
    assert_eq!(validation.field, "status");
    assert_eq!(validation.reason, "this status is already the primary");

    let err = members
        .add_status(i64::MAX, status, ACTOR)
        .await
        .expect_err("unknown member must fail");
    assert!(matches!(err, DomainError::NotFound(_)));

    assert_eq!(
        members
            .by_primary_status(status)
            .await
            .expect("listing must succeed")
            .len(),
        1
    );
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn user_signup_and_login() {
    let pool = pool().await;
    let suffix = unique_suffix();
    let auth = AuthService::new(MySqlUserRepository::new(pool));
    let username = format!("user_{suffix}");

    let input = NewUserInput {
        username: username.clone(),
        email: format!("user_{suffix}@example.org"),
        password: "password123".to_string(),
        enabled: true,
        display_name: "Smoke".to_string(),
        ugroup: "editor".to_string(),
    };
    auth.create_user(input.clone())
        .await
        .expect("create_user must succeed");

    let err = auth
        .create_user(input.clone())
        .await
        .expect_err("duplicate username must fail");
    assert_eq!(
        err.as_validation().map(|v| v.reason.as_str()),
        Some("this username is taken, use another")
    );

    let err = auth
        .create_user(NewUserInput {
            username: format!("other_{suffix}"),
            ugroup: "nobody".to_string(),
            ..input
        })
        .await
        .expect_err("unknown group must fail");
    assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("ugroup"));

    let user = auth
        .check_login(&username, "password123")
        .await
        .expect("login must succeed");
    assert_eq!(user.username, username);
}

async fn insert_group(pool: &MySqlPool, id: &str) -> Result<MySqlQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO ugroup (id, display_name) VALUES (?, 'Smoke')")
        .bind(id)
        .execute(pool)
        .await
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn server_errors_are_classified_with_the_referencing_column() {
    let pool = pool().await;
    let suffix = unique_suffix();

    let err = sqlx::query(
        "INSERT INTO article (title, web, date, created_by, updated_by, created_at, updated_at, newspaper) \
         VALUES (?, '', 0, ?, ?, 0, 0, ?)",
    )
    .bind(format!("orphan {suffix}"))
    .bind(ACTOR)
    .bind(ACTOR)
    .bind(i64::MAX)
    .execute(&pool)
    .await
    .expect_err("missing newspaper must fail");
    assert_eq!(
        classify(&err),
        Some(ConstraintViolation::ForeignKey {
            field: "newspaper".to_string()
        })
    );

    let group = format!("g{suffix}");
    insert_group(&pool, &group)
        .await
        .expect("first group must be created");
    let err = insert_group(&pool, &group)
        .await
        .expect_err("second group must fail");
    assert_eq!(classify(&err), Some(ConstraintViolation::DuplicateKey));
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn publication_co_authors_and_research_lines() {
    let pool = pool().await;
    let suffix = unique_suffix();

    let publisher = MySqlPublisherRepository::new(pool.clone())
        .create(
            &PublisherInput {
                name: format!("publisher {suffix}"),
            },
            ACTOR,
        )
        .await
        .expect("publisher must be created");
    let publication_type = MySqlPublicationTypeRepository::new(pool.clone())
        .create(
            &PublicationTypeInput {
                name: format!("type {suffix}"),
            },
            ACTOR,
        )
        .await
        .expect("publication type must be created");
    let status = status(&pool, &suffix).await;
    let author = member(&pool, &suffix, status).await;

    let publications = PublicationService::new(MySqlPublicationRepository::new(pool.clone()));
    let publication = publications
        .create(
            &PublicationInput {
                title: format!("publication {suffix}"),
                year: 2015,
                journal: "Journal of Smoke".to_string(),
                publication_type,
                publisher,
                primary_author: author,
                ..PublicationInput::default()
            },
            ACTOR,
        )
        .await
        .expect("publication must be created");
    assert_eq!(
        publications
            .repo()
            .by_primary_author(author)
            .await
            .expect("listing must succeed")
            .len(),
        1
    );

    publications
        .repo()
        .add_member(publication, author, ACTOR)
        .await
        .expect("first link must succeed");
    let err = MySqlMemberRepository::new(pool.clone())
        .add_publication(author, publication, ACTOR)
        .await
        .expect_err("same pair from the member side must fail");
    let validation = err.as_validation().expect("must be a validation error");
    assert_eq!(validation.field, "publication");
    assert_eq!(validation.reason, "this publication has already been added");

    let line = research_line(&pool, &suffix).await;
    publications
        .repo()
        .add_research_line(publication, line, ACTOR)
        .await
        .expect("research line link must succeed");
    let linked = publications
        .repo()
        .by_research_line(line)
        .await
        .expect("listing must succeed");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].item.id, publication);
    assert_eq!(linked[0].link.relation, "research_line");

    assert_eq!(publications.repo().delete(publication).await.expect("delete"), 1);
    assert!(
        publications
            .repo()
            .by_member(author)
            .await
            .expect("listing must succeed")
            .is_empty()
    );
}

#[tokio::test]
#[ignore = "requires running MySQL"]
async fn group_ids_are_unique() {
    let pool = pool().await;
    let suffix = unique_suffix();
    let groups = UGroupService::new(MySqlUGroupRepository::new(pool));

    let input = UGroupInput {
        id: format!("grp{suffix}"),
        display_name: "Reviewers".to_string(),
    };
    groups.create(&input).await.expect("group must be created");

    let err = groups.create(&input).await.expect_err("same id must fail");
    let validation = err.as_validation().expect("must be a validation error");
    assert_eq!(validation.field, "id");
    assert_eq!(validation.reason, "this id is taken, use another");

    groups
        .update_display_name(&input.id, "Referees")
        .await
        .expect("update must succeed");
    assert_eq!(
        groups.get(&input.id).await.expect("must exist").display_name,
        "Referees"
    );
    assert_eq!(groups.repo().delete(&input.id).await.expect("delete"), 1);
}
