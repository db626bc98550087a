use std::sync::Arc;

use studydash_domain::todo::{Todo, TodoRepository};
use studydash_infrastructure::persistence::repositories::SqliteTodoRepository;


#[tokio::test]
async fn todo_repo_roundtrip() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "tasks@example.com").await;
    let repo = SqliteTodoRepository::new(Arc::new(pool.clone()));

    let todo = Todo::new(user_id.clone(), "Read chapter 4".to_string()).expect("create todo");
    repo.save(&todo).await.expect("save");

    let fetched = repo
        .find_by_id(todo.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.title(), "Read chapter 4");
    assert!(!fetched.is_completed());

    repo.delete(todo.id()).await.expect("delete");
    assert!(repo
        .find_by_id(todo.id())
        .await
        .expect("find after delete")
        .is_none());
}

#[tokio::test]
async fn todo_completion_persists() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "tasks@example.com").await;
    let repo = SqliteTodoRepository::new(Arc::new(pool.clone()));

    let mut todo = Todo::new(user_id.clone(), "Submit report".to_string()).expect("create todo");
    repo.save(&todo).await.expect("save");

    todo.set_completed(true);
    repo.save(&todo).await.expect("save completed");

    let fetched = repo
        .find_by_id(todo.id())
        .await
        .expect("find")
        .expect("should exist");
    assert!(fetched.is_completed());
    assert!(fetched.updated_at() >= fetched.created_at());
}

#[tokio::test]
async fn todos_are_scoped_to_user() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = test_helpers::seed_user(&pool, "alice@example.com").await;
    let bob = test_helpers::seed_user(&pool, "bob@example.com").await;
    let repo = SqliteTodoRepository::new(Arc::new(pool.clone()));

    for title in ["one", "two", "three"] {
        let todo = Todo::new(alice.clone(), title.to_string()).expect("create todo");
        repo.save(&todo).await.expect("save");
    }
    let bobs = Todo::new(bob.clone(), "other".to_string()).expect("create todo");
    repo.save(&bobs).await.expect("save");

    let alice_todos = repo.list_for_user(&alice).await.expect("list");
    assert_eq!(alice_todos.len(), 3);
    assert!(alice_todos.iter().all(|t| t.user_id() == &alice));

    let bob_todos = repo.list_for_user(&bob).await.expect("list");
    assert_eq!(bob_todos.len(), 1);
}
