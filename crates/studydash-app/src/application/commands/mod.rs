pub mod command_handler;
pub mod handlers;
pub mod note_commands;
pub mod plan_commands;
pub mod streak_commands;
pub mod todo_commands;

pub use command_handler::CommandHandler;
