use serde::{Deserialize, Serialize};

use studydash_domain::streak::{DailyLogin, LoginStreak};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginStreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_login_at: String,   // ISO 8601 instant
    pub last_login_date: String, // YYYY-MM-DD
}

impl From<&LoginStreak> for LoginStreakDto {
    fn from(streak: &LoginStreak) -> Self {
        Self {
            current_streak: streak.current_streak(),
            longest_streak: streak.longest_streak(),
            last_login_at: streak.last_login_at().to_rfc3339(),
            last_login_date: streak.last_login_day().format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLoginDto {
    pub date: String, // YYYY-MM-DD
    pub login_at: String,
}

impl From<&DailyLogin> for DailyLoginDto {
    fn from(login: &DailyLogin) -> Self {
        Self {
            date: login.day().format("%Y-%m-%d").to_string(),
            login_at: login.login_at().to_rfc3339(),
        }
    }
}

/// Streak widget payload: the streak record (absent for a brand-new
/// user) plus the recent login history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakStateDto {
    pub streak: Option<LoginStreakDto>,
    pub recent_logins: Vec<DailyLoginDto>,
}
