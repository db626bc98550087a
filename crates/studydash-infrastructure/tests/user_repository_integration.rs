use std::sync::Arc;

use studydash_domain::user::{User, UserRepository};
use studydash_infrastructure::persistence::repositories::SqliteUserRepository;


#[tokio::test]
async fn user_repo_save_find_delete() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let user = User::new("student@example.com".to_string(), "Student".to_string())
        .expect("create user");
    repo.save(&user).await.expect("save");

    let by_id = repo
        .find_by_id(user.id())
        .await
        .expect("find by id")
        .expect("should exist");
    assert_eq!(by_id.email(), "student@example.com");
    assert_eq!(by_id.name(), "Student");

    let by_email = repo
        .find_by_email("student@example.com")
        .await
        .expect("find by email")
        .expect("should exist");
    assert_eq!(by_email.id(), user.id());

    repo.delete(user.id()).await.expect("delete");
    assert!(repo
        .find_by_id(user.id())
        .await
        .expect("find after delete")
        .is_none());
}

#[tokio::test]
async fn user_repo_save_is_upsert() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let mut user =
        User::new("student@example.com".to_string(), "Student".to_string()).expect("create user");
    repo.save(&user).await.expect("save");

    user.rename("Graduate".to_string()).expect("rename");
    repo.save(&user).await.expect("save again");

    let fetched = repo
        .find_by_id(user.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.name(), "Graduate");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let first =
        User::new("taken@example.com".to_string(), "First".to_string()).expect("create user");
    repo.save(&first).await.expect("save");

    let second =
        User::new("taken@example.com".to_string(), "Second".to_string()).expect("create user");
    assert!(repo.save(&second).await.is_err());
}

#[tokio::test]
async fn unknown_email_returns_none() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let found = repo
        .find_by_email("nobody@example.com")
        .await
        .expect("find");
    assert!(found.is_none());
}
