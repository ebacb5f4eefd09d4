mod common;

use bookmarks_server::{
    database::{self, models::NewBookmark, BookmarkRepository},
    errors::AppError,
};

fn new_bookmark(title: &str, rating: i32) -> NewBookmark {
    NewBookmark {
        title: title.to_string(),
        url: format!("https://example.com/{}", title),
        description: String::new(),
        rating,
    }
}

#[tokio::test]
async fn create_assigns_unique_ids_and_persists() {
    let repository = BookmarkRepository::new(common::test_db().await);

    let first = repository.create(new_bookmark("one", 1)).await.unwrap();
    let second = repository.create(new_bookmark("two", 2)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());

    let fetched = repository.get_by_id(&first.id).await.unwrap();
    assert_eq!(fetched, first);
    assert_eq!(fetched.url, "https://example.com/one");
}

#[tokio::test]
async fn list_returns_rows_in_insertion_order() {
    let repository = BookmarkRepository::new(common::test_db().await);
    assert!(repository.list().await.unwrap().is_empty());

    let mut expected = Vec::new();
    for n in 0..5 {
        let created = repository
            .create(new_bookmark(&format!("b{}", n), 3))
            .await
            .unwrap();
        expected.push(created.id);
    }

    let ids: Vec<String> = repository
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn missing_ids_signal_not_found() {
    let repository = BookmarkRepository::new(common::test_db().await);

    assert!(matches!(
        repository.get_by_id("does-not-exist").await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        repository.delete_by_id("does-not-exist").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn delete_removes_only_the_addressed_row() {
    let repository = BookmarkRepository::new(common::test_db().await);
    let keep = repository.create(new_bookmark("keep", 5)).await.unwrap();
    let removed = repository.create(new_bookmark("drop", 4)).await.unwrap();

    repository.delete_by_id(&removed.id).await.unwrap();

    let remaining = repository.list().await.unwrap();
    assert_eq!(remaining, vec![keep]);
    assert!(matches!(
        repository.delete_by_id(&removed.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn stored_text_is_kept_verbatim() {
    let repository = BookmarkRepository::new(common::test_db().await);
    let raw = NewBookmark {
        title: "<b>bold</b>".to_string(),
        url: "https://example.com".to_string(),
        description: "<i>it's</i>".to_string(),
        rating: 2,
    };

    let created = repository.create(raw.clone()).await.unwrap();
    let stored = repository.get_by_id(&created.id).await.unwrap();
    assert_eq!(stored.title, raw.title);
    assert_eq!(stored.description, raw.description);
}

#[tokio::test]
async fn storage_faults_surface_as_database_errors() {
    let db = common::test_db().await;
    let repository = BookmarkRepository::new(db.clone());
    db.close().await.unwrap();

    assert!(matches!(repository.list().await, Err(AppError::DbError(_))));
}

#[tokio::test]
async fn schema_setup_is_idempotent_and_wipe_clears_rows() {
    let db = common::test_db().await;
    database::ensure_schema(&db).await.unwrap();

    let repository = BookmarkRepository::new(db.clone());
    repository.create(new_bookmark("a", 1)).await.unwrap();
    repository.create(new_bookmark("b", 1)).await.unwrap();

    assert_eq!(database::wipe(&db).await.unwrap(), 2);
    assert!(repository.list().await.unwrap().is_empty());
}
