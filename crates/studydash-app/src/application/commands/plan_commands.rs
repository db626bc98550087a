use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::dtos::WeeklyPlanDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeeklyPlanCommand {
    pub principal: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goals: Vec<String>,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeeklyPlanResult {
    pub plan: WeeklyPlanDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWeeklyPlanCommand {
    pub principal: Option<String>,
    pub plan_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWeeklyPlanResult {
    pub plan_id: String,
}
