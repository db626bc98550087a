use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::config::AppConfig;
use crate::application::queries::{
    NoteQueryService, StreakQueryService, TodoQueryService, WeeklyPlanQueryService,
};
use crate::application::services::IdentityService;
use crate::api::state::{AppState, CommandHandlers, Queries, Repositories, Services};
use studydash_domain::note::NoteRepository;
use studydash_domain::planner::WeeklyPlanRepository;
use studydash_domain::streak::StreakStore;
use studydash_domain::todo::TodoRepository;
use studydash_domain::user::UserRepository;
use studydash_infrastructure::logging;
use studydash_infrastructure::persistence::{
    repositories::{
        SqliteNoteRepository, SqliteStreakStore, SqliteTodoRepository, SqliteUserRepository,
        SqliteWeeklyPlanRepository,
    },
    Database,
};

pub async fn build_app_state(config: AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let startup_started_at = Instant::now();

    logging::init_logger(config.log_dir.clone())
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;

    std::fs::create_dir_all(&config.data_dir)
        .map_err(|e| format!("Failed to create data directory: {}", e))?;

    let db_path = config.db_path();
    let db_path_str = db_path.to_str().ok_or("Invalid database path")?;

    info!("Database path: {}", db_path_str);

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Arc::new(Database::new(db_path_str).await?);
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(database.pool().clone());

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let streak_store = Arc::new(SqliteStreakStore::new(pool.clone())) as Arc<dyn StreakStore>;
    let todo_repo = Arc::new(SqliteTodoRepository::new(pool.clone())) as Arc<dyn TodoRepository>;
    let note_repo = Arc::new(SqliteNoteRepository::new(pool.clone())) as Arc<dyn NoteRepository>;
    let plan_repo =
        Arc::new(SqliteWeeklyPlanRepository::new(pool.clone())) as Arc<dyn WeeklyPlanRepository>;

    let identity = Arc::new(IdentityService::new(user_repo.clone()));

    let queries = Queries {
        streak: Arc::new(StreakQueryService::new(
            identity.clone(),
            streak_store.clone(),
        )),
        todo: Arc::new(TodoQueryService::new(identity.clone(), todo_repo.clone())),
        note: Arc::new(NoteQueryService::new(identity.clone(), note_repo.clone())),
        plan: Arc::new(WeeklyPlanQueryService::new(
            identity.clone(),
            plan_repo.clone(),
        )),
    };

    info!("🔧 Initializing command handlers...");
    let command_handlers = CommandHandlers {
        record_login: Arc::new(RecordLoginCommandHandler::new(
            identity.clone(),
            streak_store.clone(),
        )),
        create_todo: Arc::new(CreateTodoCommandHandler::new(
            identity.clone(),
            todo_repo.clone(),
        )),
        set_todo_completion: Arc::new(SetTodoCompletionCommandHandler::new(
            identity.clone(),
            todo_repo.clone(),
        )),
        delete_todo: Arc::new(DeleteTodoCommandHandler::new(
            identity.clone(),
            todo_repo.clone(),
        )),
        create_note: Arc::new(CreateNoteCommandHandler::new(
            identity.clone(),
            note_repo.clone(),
        )),
        update_note: Arc::new(UpdateNoteCommandHandler::new(
            identity.clone(),
            note_repo.clone(),
        )),
        delete_note: Arc::new(DeleteNoteCommandHandler::new(
            identity.clone(),
            note_repo.clone(),
        )),
        create_plan: Arc::new(CreateWeeklyPlanCommandHandler::new(
            identity.clone(),
            plan_repo.clone(),
        )),
        delete_plan: Arc::new(DeleteWeeklyPlanCommandHandler::new(
            identity.clone(),
            plan_repo.clone(),
        )),
    };
    info!("✓ Command handlers initialized");

    info!(
        "✅ AppState ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        database,
        repositories: Repositories {
            user: user_repo,
            streak: streak_store,
            todo: todo_repo,
            note: note_repo,
            plan: plan_repo,
        },
        services: Services { identity },
        queries,
        command_handlers,
    })
}
