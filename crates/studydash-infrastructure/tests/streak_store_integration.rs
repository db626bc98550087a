use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use studydash_domain::streak::{LoginStreak, StreakStore};
use studydash_infrastructure::persistence::repositories::SqliteStreakStore;


fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

#[tokio::test]
async fn first_login_starts_streak() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "fresh@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    assert!(store.find_streak(&user_id).await.expect("find").is_none());
    assert!(!store
        .has_logged_today(&user_id, at(10, 9).date_naive())
        .await
        .expect("check"));

    let recorded = store.record_login(&user_id, at(10, 9)).await.expect("record");

    assert!(recorded.newly_recorded);
    assert_eq!(recorded.streak.current_streak(), 1);
    assert_eq!(recorded.streak.longest_streak(), 1);
    assert_eq!(recorded.streak.last_login_at(), at(10, 9));

    assert!(store
        .has_logged_today(&user_id, at(10, 9).date_naive())
        .await
        .expect("check"));

    let logins = store.recent_logins(&user_id, 5).await.expect("list");
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].day(), at(10, 9).date_naive());
}

#[tokio::test]
async fn second_record_same_day_is_idempotent() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "repeat@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    let first = store.record_login(&user_id, at(10, 8)).await.expect("first");
    let second = store
        .record_login(&user_id, at(10, 21))
        .await
        .expect("second");

    assert!(first.newly_recorded);
    assert!(!second.newly_recorded);
    assert_eq!(second.streak.current_streak(), 1);
    assert_eq!(second.streak.longest_streak(), 1);
    // The stored instant is still the first login's, not the retry's.
    assert_eq!(second.streak.last_login_at(), at(10, 8));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM daily_logins WHERE user_id = ?1")
        .bind(user_id.as_str())
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn consecutive_days_extend_streak() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "daily@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    for day in 10..=12 {
        store
            .record_login(&user_id, at(day, 7))
            .await
            .expect("record");
    }

    let streak = store
        .find_streak(&user_id)
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(streak.current_streak(), 3);
    assert_eq!(streak.longest_streak(), 3);
}

#[tokio::test]
async fn midnight_straddling_logins_count_as_consecutive() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "night-owl@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    store
        .record_login(&user_id, Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 50).unwrap())
        .await
        .expect("late login");
    let recorded = store
        .record_login(&user_id, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 20).unwrap())
        .await
        .expect("early login");

    assert!(recorded.newly_recorded);
    assert_eq!(recorded.streak.current_streak(), 2);
}

#[tokio::test]
async fn gap_resets_current_and_keeps_longest() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "lapsed@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    for day in 1..=5 {
        store
            .record_login(&user_id, at(day, 9))
            .await
            .expect("record");
    }

    // Two missed days, back on day 8.
    let recorded = store.record_login(&user_id, at(8, 9)).await.expect("record");

    assert_eq!(recorded.streak.current_streak(), 1);
    assert_eq!(recorded.streak.longest_streak(), 5);

    // The invariant holds through the reset and the next run.
    for day in 9..=11 {
        let r = store
            .record_login(&user_id, at(day, 9))
            .await
            .expect("record");
        assert!(r.streak.longest_streak() >= r.streak.current_streak());
    }

    let streak = store
        .find_streak(&user_id)
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(streak.current_streak(), 4); // days 8..=11
    assert_eq!(streak.longest_streak(), 5);
}

#[tokio::test]
async fn contract_examples_hold() {
    // {current: 5, longest: 7, last: day10}; login day11 -> {6, 7}.
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "example@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    for day in [4u32, 5, 6, 7, 8, 9, 10] {
        store
            .record_login(&user_id, at(day, 9))
            .await
            .expect("seed history");
    }
    sqlx::query(
        "UPDATE login_streaks SET current_streak = 5, longest_streak = 7 WHERE user_id = ?1",
    )
    .bind(user_id.as_str())
    .execute(&pool)
    .await
    .expect("seed streak");

    let on_day11 = store
        .record_login(&user_id, at(11, 9))
        .await
        .expect("record");
    assert_eq!(on_day11.streak.current_streak(), 6);
    assert_eq!(on_day11.streak.longest_streak(), 7);
}

#[tokio::test]
async fn contract_examples_hold_after_gap() {
    // {current: 5, longest: 7, last: day10}; login day13 -> {1, 7}.
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "example2@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    for day in [6u32, 7, 8, 9, 10] {
        store
            .record_login(&user_id, at(day, 9))
            .await
            .expect("seed history");
    }
    sqlx::query(
        "UPDATE login_streaks SET current_streak = 5, longest_streak = 7 WHERE user_id = ?1",
    )
    .bind(user_id.as_str())
    .execute(&pool)
    .await
    .expect("seed streak");

    let on_day13 = store
        .record_login(&user_id, at(13, 9))
        .await
        .expect("record");
    assert_eq!(on_day13.streak.current_streak(), 1);
    assert_eq!(on_day13.streak.longest_streak(), 7);
}

#[tokio::test]
async fn recent_logins_limit_and_order() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "historian@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    for day in 1..=7 {
        store
            .record_login(&user_id, at(day, 9))
            .await
            .expect("record");
    }

    let logins = store.recent_logins(&user_id, 5).await.expect("list");

    assert_eq!(logins.len(), 5);
    let days: Vec<_> = logins.iter().map(|l| l.day()).collect();
    // Newest first, one entry per day, no duplicates.
    for pair in days.windows(2) {
        assert!(pair[0] > pair[1]);
    }
    assert_eq!(days[0], at(7, 9).date_naive());
    assert_eq!(days[4], at(3, 9).date_naive());
}

#[tokio::test]
async fn duplicate_day_insert_is_rejected_by_constraint() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "dup@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    store.record_login(&user_id, at(10, 9)).await.expect("record");

    // A raw second insert for the same day hits the unique index.
    let result = sqlx::query(
        "INSERT INTO daily_logins (id, user_id, login_at, login_day) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind("raw-duplicate")
    .bind(user_id.as_str())
    .bind(at(10, 15))
    .bind("2024-03-10")
    .execute(&pool)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn concurrent_writer_losing_race_degrades_to_noop() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "racer@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    // Another request already wrote today's row and streak.
    sqlx::query(
        "INSERT INTO daily_logins (id, user_id, login_at, login_day) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind("other-writer")
    .bind(user_id.as_str())
    .bind(at(10, 9))
    .bind("2024-03-10")
    .execute(&pool)
    .await
    .expect("insert login");

    sqlx::query(
        "INSERT INTO login_streaks (user_id, current_streak, longest_streak, last_login_at) VALUES (?1, 3, 4, ?2)",
    )
    .bind(user_id.as_str())
    .bind(at(10, 9))
    .execute(&pool)
    .await
    .expect("insert streak");

    let recorded = store
        .record_login(&user_id, at(10, 11))
        .await
        .expect("record");

    assert!(!recorded.newly_recorded);
    assert_eq!(recorded.streak.current_streak(), 3);
    assert_eq!(recorded.streak.longest_streak(), 4);
}

#[tokio::test]
async fn missing_streak_record_is_reseeded() {
    // Simulates a crash between the login insert and the streak upsert.
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "crashed@example.com").await;
    let store = SqliteStreakStore::new(Arc::new(pool.clone()));

    sqlx::query(
        "INSERT INTO daily_logins (id, user_id, login_at, login_day) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind("orphan-login")
    .bind(user_id.as_str())
    .bind(at(10, 9))
    .bind("2024-03-10")
    .execute(&pool)
    .await
    .expect("insert login");

    let recorded = store
        .record_login(&user_id, at(10, 12))
        .await
        .expect("record");

    assert!(!recorded.newly_recorded);
    assert_eq!(recorded.streak.current_streak(), 1);
    assert_eq!(recorded.streak.longest_streak(), 1);

    let stored: Option<LoginStreak> = store.find_streak(&user_id).await.expect("find");
    assert!(stored.is_some());
}
