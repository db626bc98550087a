use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::UserId;
use crate::streak::aggregate::LoginStreak;
use crate::streak::day;

/// Domain service for streak evaluation.
/// Contains pure domain logic without infrastructure dependencies.
pub struct StreakEvaluator;

impl StreakEvaluator {
    /// Compute the streak state after recording a login at `now`.
    ///
    /// `previous` is the stored streak record, if any; `last_login_day`
    /// is the calendar day of the most recent login BEFORE today, taken
    /// from the login log. Both sides of the gap comparison are already
    /// day-truncated.
    ///
    /// Precondition: the caller has verified there is no login recorded
    /// for today yet. A same-day login must short-circuit before
    /// evaluation, so a zero gap never reaches this function.
    pub fn evaluate(
        user_id: &UserId,
        previous: Option<&LoginStreak>,
        last_login_day: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> LoginStreak {
        let previous = match previous {
            Some(streak) => streak,
            None => return LoginStreak::started(user_id.clone(), now),
        };

        let today = day::day_of(now);

        match last_login_day {
            Some(last_day) if day::gap_in_days(last_day, today) == 1 => previous.extended(now),
            // Gap of two or more days, or a streak record with no login
            // log behind it: the run is broken either way.
            _ => previous.restarted(now),
        }
    }
}
