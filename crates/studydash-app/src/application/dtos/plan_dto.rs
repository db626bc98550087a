use serde::{Deserialize, Serialize};

use studydash_domain::planner::WeeklyPlan;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlanDto {
    pub id: String,
    pub start_date: String, // YYYY-MM-DD
    pub end_date: String,   // YYYY-MM-DD
    pub goals: Vec<String>,
    pub subjects: Vec<String>,
    pub created_at: String,
}

impl From<&WeeklyPlan> for WeeklyPlanDto {
    fn from(plan: &WeeklyPlan) -> Self {
        Self {
            id: plan.id().as_str().to_string(),
            start_date: plan.start_date().format("%Y-%m-%d").to_string(),
            end_date: plan.end_date().format("%Y-%m-%d").to_string(),
            goals: plan.goals().to_vec(),
            subjects: plan.subjects().to_vec(),
            created_at: plan.created_at().to_rfc3339(),
        }
    }
}
