use chrono::NaiveDate;
use std::sync::Arc;

use studydash_domain::planner::{WeeklyPlan, WeeklyPlanRepository};
use studydash_infrastructure::persistence::repositories::SqliteWeeklyPlanRepository;


fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn plan(user_id: &studydash_domain::shared::UserId, start: NaiveDate, end: NaiveDate) -> WeeklyPlan {
    WeeklyPlan::new(
        user_id.clone(),
        start,
        end,
        vec!["Finish problem set".to_string()],
        vec!["Physics".to_string(), "Math".to_string()],
    )
    .expect("create plan")
}

#[tokio::test]
async fn plan_repo_roundtrip() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "planner@example.com").await;
    let repo = SqliteWeeklyPlanRepository::new(Arc::new(pool.clone()));

    let created = plan(&user_id, date(3, 11), date(3, 17));
    repo.save(&created).await.expect("save");

    let fetched = repo
        .find_by_id(created.id())
        .await
        .expect("find")
        .expect("should exist");

    assert_eq!(fetched.start_date(), date(3, 11));
    assert_eq!(fetched.end_date(), date(3, 17));
    assert_eq!(fetched.goals(), &["Finish problem set".to_string()]);
    assert_eq!(fetched.subjects().len(), 2);

    repo.delete(created.id()).await.expect("delete");
    assert!(repo
        .find_by_id(created.id())
        .await
        .expect("find after delete")
        .is_none());
}

#[tokio::test]
async fn plans_listed_most_recent_week_first() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "planner@example.com").await;
    let repo = SqliteWeeklyPlanRepository::new(Arc::new(pool.clone()));

    repo.save(&plan(&user_id, date(3, 4), date(3, 10)))
        .await
        .expect("save week 1");
    repo.save(&plan(&user_id, date(3, 18), date(3, 24)))
        .await
        .expect("save week 3");
    repo.save(&plan(&user_id, date(3, 11), date(3, 17)))
        .await
        .expect("save week 2");

    let plans = repo.list_for_user(&user_id).await.expect("list");

    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0].start_date(), date(3, 18));
    assert_eq!(plans[1].start_date(), date(3, 11));
    assert_eq!(plans[2].start_date(), date(3, 4));
}
