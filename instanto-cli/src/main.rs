use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use instanto_db::DomainError;
use instanto_db::application::article_service::ArticleService;
use instanto_db::application::auth_service::AuthService;
use instanto_db::application::financed_project_service::FinancedProjectService;
use instanto_db::application::newspaper_service::NewspaperService;
use instanto_db::data::article_repository::ArticleRepository;
use instanto_db::data::category_repository::CategoryRepository;
use instanto_db::data::financed_project_repository::FinancedProjectRepository;
use instanto_db::data::funding_body_repository::FundingBodyRepository;
use instanto_db::data::member_repository::MemberRepository;
use instanto_db::data::newspaper_repository::NewspaperRepository;
use instanto_db::data::partner_repository::PartnerRepository;
use instanto_db::data::publication_repository::PublicationRepository;
use instanto_db::data::publication_type_repository::PublicationTypeRepository;
use instanto_db::data::publisher_repository::PublisherRepository;
use instanto_db::data::repositories::mysql::{
    MySqlArticleRepository, MySqlCategoryRepository, MySqlFinancedProjectRepository,
    MySqlFundingBodyRepository, MySqlMemberRepository, MySqlNewspaperRepository,
    MySqlPartnerRepository, MySqlPublicationRepository, MySqlPublicationTypeRepository,
    MySqlPublisherRepository, MySqlResearchAreaRepository, MySqlResearchLineRepository,
    MySqlStatusRepository, MySqlStudentWorkRepository, MySqlStudentWorkTypeRepository,
    MySqlUGroupRepository, MySqlUserRepository,
};
use instanto_db::data::research_area_repository::ResearchAreaRepository;
use instanto_db::data::research_line_repository::ResearchLineRepository;
use instanto_db::data::status_repository::StatusRepository;
use instanto_db::data::student_work_repository::StudentWorkRepository;
use instanto_db::data::student_work_type_repository::StudentWorkTypeRepository;
use instanto_db::data::ugroup_repository::UGroupRepository;
use instanto_db::domain::article::ArticleInput;
use instanto_db::domain::newspaper::NewspaperInput;
use instanto_db::domain::user::NewUserInput;
use instanto_db::infrastructure::database::{create_pool, run_migrations};
use instanto_db::infrastructure::logging::init_logging;
use instanto_db::infrastructure::settings::Settings;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "instanto-cli", version, about = "Operator tool for the instanto database")]
struct Cli {
    /// Name recorded in created_by / updated_by.
    #[arg(long, global = true, default_value = "admin")]
    actor: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations.
    Migrate,
    #[command(subcommand)]
    Newspaper(NewspaperCommand),
    #[command(subcommand)]
    Article(ArticleCommand),
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Number of rows of an entity.
    Count {
        #[arg(value_enum)]
        entity: Entity,
    },
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Subcommand)]
enum NewspaperCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        web: String,
    },
    List {
        /// e.g. "name asc,id desc"
        #[arg(long)]
        order: Option<String>,
    },
    Get {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum ArticleCommand {
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        web: String,
        /// Unix seconds.
        #[arg(long)]
        date: i64,
        #[arg(long)]
        newspaper: i64,
    },
    List {
        #[arg(long)]
        order: Option<String>,
    },
    AddResearchLine {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        research_line: i64,
    },
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    AddFundingBody {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        funding_body: i64,
        #[arg(long)]
        record: String,
    },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        display_name: String,
        #[arg(long, default_value = "editor")]
        group: String,
    },
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Entity {
    Article,
    Category,
    FinancedProject,
    FundingBody,
    Member,
    Newspaper,
    Partner,
    Publication,
    PublicationType,
    Publisher,
    ResearchArea,
    ResearchLine,
    Status,
    StudentWork,
    StudentWorkType,
    #[value(name = "ugroup")]
    UGroup,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database).await?;
    if settings.run_migrations || matches!(cli.command, Command::Migrate) {
        run_migrations(&pool).await?;
    }

    let actor = cli.actor.as_str();
    match cli.command {
        Command::Migrate => print_json(&json!({ "migrated": true }))?,
        Command::Newspaper(command) => newspaper(&pool, command, actor).await?,
        Command::Article(command) => article(&pool, command, actor).await?,
        Command::Project(command) => project(&pool, command, actor).await?,
        Command::Count { entity } => {
            let count = count(&pool, entity).await?;
            print_json(&json!({ "count": count }))?;
        }
        Command::User(command) => user(&pool, command).await?,
    }

    Ok(())
}

async fn newspaper(pool: &MySqlPool, command: NewspaperCommand, actor: &str) -> Result<()> {
    let service = NewspaperService::new(MySqlNewspaperRepository::new(pool.clone()));
    match command {
        NewspaperCommand::Create { name, web } => {
            let id = service
                .create(&NewspaperInput { name, web }, actor)
                .await
                .map_err(explain)?;
            info!(id, "newspaper created");
            print_json(&json!({ "id": id }))
        }
        NewspaperCommand::List { order } => {
            print_json(&service.list(order.as_deref()).await.map_err(explain)?)
        }
        NewspaperCommand::Get { id } => print_json(&service.get(id).await.map_err(explain)?),
    }
}

async fn article(pool: &MySqlPool, command: ArticleCommand, actor: &str) -> Result<()> {
    let service = ArticleService::new(MySqlArticleRepository::new(pool.clone()));
    match command {
        ArticleCommand::Create {
            title,
            web,
            date,
            newspaper,
        } => {
            let input = ArticleInput {
                title,
                web,
                date,
                newspaper,
            };
            let id = service.create(&input, actor).await.map_err(explain)?;
            info!(id, "article created");
            print_json(&json!({ "id": id }))
        }
        ArticleCommand::List { order } => {
            print_json(&service.list(order.as_deref()).await.map_err(explain)?)
        }
        ArticleCommand::AddResearchLine { id, research_line } => {
            service
                .repo()
                .add_research_line(id, research_line, actor)
                .await
                .map_err(explain)?;
            print_json(&json!({ "article": id, "research_line": research_line }))
        }
    }
}

async fn project(pool: &MySqlPool, command: ProjectCommand, actor: &str) -> Result<()> {
    let service = FinancedProjectService::new(MySqlFinancedProjectRepository::new(pool.clone()));
    match command {
        ProjectCommand::AddFundingBody {
            id,
            funding_body,
            record,
        } => {
            service
                .add_funding_body(id, funding_body, &record, actor)
                .await
                .map_err(explain)?;
            print_json(&json!({
                "financed_project": id,
                "funding_body": funding_body,
                "record": record,
            }))
        }
    }
}

async fn count(pool: &MySqlPool, entity: Entity) -> Result<i64> {
    let pool = pool.clone();
    let count = match entity {
        Entity::Article => MySqlArticleRepository::new(pool).count().await,
        Entity::Category => MySqlCategoryRepository::new(pool).count().await,
        Entity::FinancedProject => MySqlFinancedProjectRepository::new(pool).count().await,
        Entity::FundingBody => MySqlFundingBodyRepository::new(pool).count().await,
        Entity::Member => MySqlMemberRepository::new(pool).count().await,
        Entity::Newspaper => MySqlNewspaperRepository::new(pool).count().await,
        Entity::Partner => MySqlPartnerRepository::new(pool).count().await,
        Entity::Publication => MySqlPublicationRepository::new(pool).count().await,
        Entity::PublicationType => MySqlPublicationTypeRepository::new(pool).count().await,
        Entity::Publisher => MySqlPublisherRepository::new(pool).count().await,
        Entity::ResearchArea => MySqlResearchAreaRepository::new(pool).count().await,
        Entity::ResearchLine => MySqlResearchLineRepository::new(pool).count().await,
        Entity::Status => MySqlStatusRepository::new(pool).count().await,
        Entity::StudentWork => MySqlStudentWorkRepository::new(pool).count().await,
        Entity::StudentWorkType => MySqlStudentWorkTypeRepository::new(pool).count().await,
        Entity::UGroup => MySqlUGroupRepository::new(pool).count().await,
    };
    count.map_err(explain)
}

async fn user(pool: &MySqlPool, command: UserCommand) -> Result<()> {
    let service = AuthService::new(MySqlUserRepository::new(pool.clone()));
    match command {
        UserCommand::Create {
            username,
            email,
            password,
            display_name,
            group,
        } => {
            let input = NewUserInput {
                username,
                email,
                password,
                enabled: true,
                display_name,
                ugroup: group,
            };
            service.create_user(input).await.map_err(explain)?;
            print_json(&json!({ "created": true }))
        }
        UserCommand::Login { username, password } => {
            let user = service
                .check_login(&username, &password)
                .await
                .map_err(explain)?;
            print_json(&user)
        }
    }
}

/// Validation errors are shown as `field: reason`, the rest as they are.
fn explain(err: DomainError) -> anyhow::Error {
    match err.as_validation() {
        Some(validation) => anyhow::anyhow!("{}: {}", validation.field, validation.reason),
        None => anyhow::Error::new(err),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
