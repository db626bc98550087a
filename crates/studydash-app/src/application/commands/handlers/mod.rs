mod note_handlers;
mod plan_handlers;
mod record_login_handler;
mod todo_handlers;


pub use note_handlers::{CreateNoteCommandHandler, DeleteNoteCommandHandler, UpdateNoteCommandHandler};
pub use plan_handlers::{CreateWeeklyPlanCommandHandler, DeleteWeeklyPlanCommandHandler};
pub use record_login_handler::RecordLoginCommandHandler;
pub use todo_handlers::{
    CreateTodoCommandHandler, DeleteTodoCommandHandler, SetTodoCompletionCommandHandler,
};
