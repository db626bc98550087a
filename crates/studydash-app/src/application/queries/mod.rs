mod note_queries;
mod plan_queries;
mod streak_queries;
mod todo_queries;

pub use note_queries::NoteQueryService;
pub use plan_queries::WeeklyPlanQueryService;
pub use streak_queries::StreakQueryService;
pub use todo_queries::TodoQueryService;
