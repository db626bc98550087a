#[cfg(test)]
mod tests {
    use super::super::aggregate::LoginStreak;
    use super::super::domain_service::StreakEvaluator;
    use crate::shared::UserId;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn instant(d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, hour, 0, 0).unwrap()
    }

    fn streak(user_id: &UserId, current: u32, longest: u32, last_day: u32) -> LoginStreak {
        LoginStreak::restore(user_id.clone(), current, longest, instant(last_day, 9))
    }

    #[test]
    fn test_first_ever_login_starts_at_one() {
        let user_id = UserId::new();
        let result = StreakEvaluator::evaluate(&user_id, None, None, instant(10, 8));

        assert_eq!(result.current_streak(), 1);
        assert_eq!(result.longest_streak(), 1);
        assert_eq!(result.last_login_at(), instant(10, 8));
    }

    #[test]
    fn test_consecutive_day_increments() {
        let user_id = UserId::new();
        let previous = streak(&user_id, 5, 7, 10);

        // Example from the contract: {5, 7, day10} + login on day11 -> {6, 7}
        let result =
            StreakEvaluator::evaluate(&user_id, Some(&previous), Some(day(10)), instant(11, 22));

        assert_eq!(result.current_streak(), 6);
        assert_eq!(result.longest_streak(), 7);
    }

    #[test]
    fn test_longest_follows_current_when_exceeded() {
        let user_id = UserId::new();
        let previous = streak(&user_id, 7, 7, 10);

        let result =
            StreakEvaluator::evaluate(&user_id, Some(&previous), Some(day(10)), instant(11, 6));

        assert_eq!(result.current_streak(), 8);
        assert_eq!(result.longest_streak(), 8);
    }

    #[test]
    fn test_gap_resets_current_but_not_longest() {
        let user_id = UserId::new();
        let previous = streak(&user_id, 5, 7, 10);

        // Example from the contract: {5, 7, day10} + login on day13 -> {1, 7}
        let result =
            StreakEvaluator::evaluate(&user_id, Some(&previous), Some(day(10)), instant(13, 7));

        assert_eq!(result.current_streak(), 1);
        assert_eq!(result.longest_streak(), 7);
    }

    #[test]
    fn test_two_day_gap_resets() {
        let user_id = UserId::new();
        let previous = streak(&user_id, 3, 3, 10);

        let result =
            StreakEvaluator::evaluate(&user_id, Some(&previous), Some(day(12)), instant(14, 12));

        assert_eq!(result.current_streak(), 1);
        assert_eq!(result.longest_streak(), 3);
    }

    #[test]
    fn test_streak_without_login_log_resets() {
        // A streak row with no login rows behind it (partial write from a
        // crash between insert and upsert) degrades to a reset, not a panic.
        let user_id = UserId::new();
        let previous = streak(&user_id, 4, 9, 10);

        let result = StreakEvaluator::evaluate(&user_id, Some(&previous), None, instant(11, 10));

        assert_eq!(result.current_streak(), 1);
        assert_eq!(result.longest_streak(), 9);
    }

    #[test]
    fn test_midnight_straddling_logins_still_consecutive() {
        let user_id = UserId::new();
        let previous = LoginStreak::restore(
            user_id.clone(),
            2,
            2,
            Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap(),
        );

        // Late-night login on day 10, early-morning login on day 11: the
        // raw timestamps are seconds apart but the days are consecutive.
        let result = StreakEvaluator::evaluate(
            &user_id,
            Some(&previous),
            Some(previous.last_login_day()),
            Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 30).unwrap(),
        );

        assert_eq!(result.current_streak(), 3);
    }

    #[test]
    fn test_longest_never_below_current() {
        let user_id = UserId::new();
        let mut state: Option<LoginStreak> = None;
        let mut last_day: Option<NaiveDate> = None;

        // A year of uneven logins: runs, gaps, more runs.
        for d in [1u32, 2, 3, 6, 7, 8, 9, 14, 20, 21] {
            let next = StreakEvaluator::evaluate(
                &user_id,
                state.as_ref(),
                last_day,
                instant(d, (d % 24).max(1)),
            );
            assert!(next.longest_streak() >= next.current_streak());
            last_day = Some(day(d));
            state = Some(next);
        }

        let final_state = state.unwrap();
        assert_eq!(final_state.current_streak(), 2); // days 20, 21
        assert_eq!(final_state.longest_streak(), 4); // days 6..=9
    }
}
