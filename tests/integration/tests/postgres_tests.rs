//! PostgreSQL Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: TEST_DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test postgres_tests

use integration_tests::{pg_context, test_database_url, unique_phone, unique_suffix};
use linkrepo_core::entities::{LinkChange, NewLink};
use linkrepo_service::{DirectoryService, LinkService, ServiceError, UserService};

#[tokio::test]
async fn test_postgres_register_twice() {
    let Some(url) = test_database_url() else {
        return;
    };
    let ctx = pg_context(url).await.expect("Failed to connect");
    let phone = unique_phone();

    UserService::new(&ctx).register(&phone).await.unwrap();
    let err = UserService::new(&ctx).register(&phone).await.unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyRegistered));
}

#[tokio::test]
async fn test_postgres_directory_and_links() {
    let Some(url) = test_database_url() else {
        return;
    };
    let ctx = pg_context(url).await.expect("Failed to connect");
    let phone = unique_phone();
    let title = format!("work{}", unique_suffix());

    UserService::new(&ctx).register(&phone).await.unwrap();
    let directories = DirectoryService::new(&ctx);
    let links = LinkService::new(&ctx);

    directories.add(&phone, &title).await.unwrap();
    let err = directories.add(&phone, &title).await.unwrap_err();
    assert!(matches!(err, ServiceError::DirectoryExists));

    let saved = links
        .save(&phone, &title, NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();
    let err = links
        .save(&phone, &title, NewLink::new("https://crates.io", "Docs"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::LinkTitleTaken));

    let change = LinkChange {
        url: None,
        title: Some("New Title".to_string()),
    };
    links.update(&phone, saved.id, change).await.unwrap();
    let listed = links.list(&phone, &title).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "New Title");
    assert_eq!(listed[0].url, "https://docs.rs");

    directories.delete(&phone, &title).await.unwrap();
    assert!(directories.list(&phone).await.unwrap().is_empty());
    let err = links.delete(&phone, saved.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::LinkNotFound));

    // a deleted title can be reused
    directories.add(&phone, &title).await.unwrap();
    assert!(links.list(&phone, &title).await.unwrap().is_empty());
}
