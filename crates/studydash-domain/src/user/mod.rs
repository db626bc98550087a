mod aggregate;
mod repository;


pub use aggregate::User;
pub use repository::UserRepository;
