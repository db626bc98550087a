mod aggregate;
mod repository;

pub use aggregate::WeeklyPlan;
pub use repository::WeeklyPlanRepository;
