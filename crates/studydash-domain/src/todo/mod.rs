mod aggregate;
mod repository;

pub use aggregate::Todo;
pub use repository::TodoRepository;
