mod aggregate;
mod day;
mod domain_service;
mod repository;
mod value_objects;

#[cfg(test)]
mod domain_service_test;

pub use aggregate::LoginStreak;
pub use day::{day_boundary, day_of, gap_in_days};
pub use domain_service::StreakEvaluator;
pub use repository::StreakStore;
pub use value_objects::{DailyLogin, RecordedLogin};
