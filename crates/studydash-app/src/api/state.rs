use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::config::AppConfig;
use crate::application::queries::{
    NoteQueryService, StreakQueryService, TodoQueryService, WeeklyPlanQueryService,
};
use crate::application::services::IdentityService;
use studydash_domain::note::NoteRepository;
use studydash_domain::planner::WeeklyPlanRepository;
use studydash_domain::streak::StreakStore;
use studydash_domain::todo::TodoRepository;
use studydash_domain::user::UserRepository;
use studydash_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub record_login: Arc<RecordLoginCommandHandler>,
    pub create_todo: Arc<CreateTodoCommandHandler>,
    pub set_todo_completion: Arc<SetTodoCompletionCommandHandler>,
    pub delete_todo: Arc<DeleteTodoCommandHandler>,
    pub create_note: Arc<CreateNoteCommandHandler>,
    pub update_note: Arc<UpdateNoteCommandHandler>,
    pub delete_note: Arc<DeleteNoteCommandHandler>,
    pub create_plan: Arc<CreateWeeklyPlanCommandHandler>,
    pub delete_plan: Arc<DeleteWeeklyPlanCommandHandler>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub streak: Arc<dyn StreakStore>,
    pub todo: Arc<dyn TodoRepository>,
    pub note: Arc<dyn NoteRepository>,
    pub plan: Arc<dyn WeeklyPlanRepository>,
}

pub struct Services {
    pub identity: Arc<IdentityService>,
}

pub struct Queries {
    pub streak: Arc<StreakQueryService>,
    pub todo: Arc<TodoQueryService>,
    pub note: Arc<NoteQueryService>,
    pub plan: Arc<WeeklyPlanQueryService>,
}

pub struct AppState {
    pub database: Arc<Database>,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        crate::api::bootstrap::build_app_state(config).await
    }

    /// Close the database pool. Call once, at shutdown.
    pub async fn shutdown(&self) {
        self.database.close().await;
    }
}
