//! Usecase Integration Tests
//!
//! Runs the services against the in-memory store.
//!
//! Run with: cargo test -p integration-tests --test usecase_tests

use integration_tests::{memory_context, unique_phone, InMemoryStore};
use linkrepo_core::entities::{LinkChange, NewLink};
use linkrepo_core::value_objects::LinkId;
use linkrepo_service::{
    DirectoryService, ErrorKind, LinkService, ServiceContext, ServiceError, UserService,
};

async fn registered(ctx: &ServiceContext) -> String {
    let phone = unique_phone();
    UserService::new(ctx).register(&phone).await.unwrap();
    phone
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_register_twice_fails() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let users = UserService::new(&ctx);
    let phone = unique_phone();

    let user = users.register(&phone).await.unwrap();
    assert_eq!(user.phone_number, phone);

    for _ in 0..2 {
        let err = users.register(&phone).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyRegistered));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
    assert_eq!(store.user_count(), 1);
}

// ============================================================================
// Directories
// ============================================================================

#[tokio::test]
async fn test_add_directory_twice_fails() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);

    directories.add(&phone, "work").await.unwrap();
    let err = directories.add(&phone, "work").await.unwrap_err();

    assert!(matches!(err, ServiceError::DirectoryExists));
    assert_eq!(err.to_string(), "directory already created!");
}

#[tokio::test]
async fn test_two_users_can_own_same_title() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let alice = registered(&ctx).await;
    let bob = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);

    directories.add(&alice, "work").await.unwrap();
    directories.add(&bob, "work").await.unwrap();

    assert_eq!(directories.list(&alice).await.unwrap().len(), 1);
    assert_eq!(directories.list(&bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unregistered_caller_is_unauthorized() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let stranger = unique_phone();

    let err = DirectoryService::new(&ctx).add(&stranger, "work").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotRegistered));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    let err = DirectoryService::new(&ctx).list(&stranger).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    let err = LinkService::new(&ctx)
        .delete(&stranger, LinkId::new(1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_delete_directory_cascades_to_links() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);
    let links = LinkService::new(&ctx);

    let work = directories.add(&phone, "work").await.unwrap();
    let keep = directories.add(&phone, "keep").await.unwrap();
    links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();
    links
        .save(&phone, "work", NewLink::new("https://crates.io", "Crates"))
        .await
        .unwrap();
    links
        .save(&phone, "keep", NewLink::new("https://example.com", "Example"))
        .await
        .unwrap();

    directories.delete(&phone, "work").await.unwrap();

    assert_eq!(store.commits(), 1);
    for (directory, deleted) in store.all_directories() {
        assert_eq!(deleted, directory.id == work.id);
    }
    for (link, deleted) in store.all_links() {
        assert_eq!(deleted, link.directory_id == work.id);
        assert_eq!(!deleted, link.directory_id == keep.id);
    }

    let err = links.list(&phone, "work").await.unwrap_err();
    assert!(matches!(err, ServiceError::DirectoryNotFound));
}

#[tokio::test]
async fn test_failed_cascade_rolls_back_directory_delete() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);

    directories.add(&phone, "work").await.unwrap();
    LinkService::new(&ctx)
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();

    store.fail_link_cascade(true);
    let err = directories.delete(&phone, "work").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(store.rollbacks(), 1);
    assert_eq!(store.commits(), 0);
    assert!(store.all_directories().iter().all(|(_, deleted)| !deleted));
    assert!(store.all_links().iter().all(|(_, deleted)| !deleted));

    store.fail_link_cascade(false);
    directories.delete(&phone, "work").await.unwrap();
    assert!(directories.list(&phone).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_directory() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;

    let err = DirectoryService::new(&ctx)
        .delete(&phone, "nope")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::DirectoryNotFound));
    assert_eq!(store.commits() + store.rollbacks(), 0);
}

#[tokio::test]
async fn test_rename_to_same_title_is_noop() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);
    directories.add(&phone, "work").await.unwrap();

    let writes = store.writes();
    directories.update(&phone, "work", "work").await.unwrap();

    assert_eq!(store.writes(), writes);
}

#[tokio::test]
async fn test_rename_directory() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    let directories = DirectoryService::new(&ctx);
    directories.add(&phone, "work").await.unwrap();
    directories.add(&phone, "music").await.unwrap();

    let err = directories
        .update(&phone, "work", "music")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::DirectoryExists));

    directories.update(&phone, "work", "jobs").await.unwrap();
    let titles: Vec<String> = directories
        .list(&phone)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, vec!["jobs".to_string(), "music".to_string()]);
}

// ============================================================================
// Links
// ============================================================================

#[tokio::test]
async fn test_duplicate_link_title_fails() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();
    let links = LinkService::new(&ctx);

    links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();
    let err = links
        .save(&phone, "work", NewLink::new("https://crates.io", "Docs"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::LinkTitleTaken));
    assert_eq!(err.to_string(), "link title already used!");
}

#[tokio::test]
async fn test_save_link_rejects_invalid_url() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();

    let err = LinkService::new(&ctx)
        .save(&phone, "work", NewLink::new("not a url", "Docs"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidUrl));
}

#[tokio::test]
async fn test_update_link_title_only() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();
    let links = LinkService::new(&ctx);
    let link = links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();

    let change = LinkChange {
        url: None,
        title: Some("New Title".to_string()),
    };
    links.update(&phone, link.id, change).await.unwrap();

    let listed = links.list(&phone, "work").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].url, "https://docs.rs");
    assert_eq!(listed[0].title, "New Title");
}

#[tokio::test]
async fn test_update_link_with_no_change_is_noop() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();
    let links = LinkService::new(&ctx);
    let link = links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();

    let writes = store.writes();
    links
        .update(&phone, link.id, LinkChange::default())
        .await
        .unwrap();
    assert_eq!(store.writes(), writes);
}

#[tokio::test]
async fn test_update_link_title_collision() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();
    let links = LinkService::new(&ctx);
    links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();
    let crates = links
        .save(&phone, "work", NewLink::new("https://crates.io", "Crates"))
        .await
        .unwrap();

    let change = LinkChange {
        url: None,
        title: Some("Docs".to_string()),
    };
    let err = links.update(&phone, crates.id, change).await.unwrap_err();
    assert!(matches!(err, ServiceError::LinkTitleTaken));
}

#[tokio::test]
async fn test_links_of_other_users_are_not_found() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let alice = registered(&ctx).await;
    let mallory = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&alice, "work").await.unwrap();
    let links = LinkService::new(&ctx);
    let link = links
        .save(&alice, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();

    let err = links.delete(&mallory, link.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::LinkNotFound));

    let change = LinkChange {
        url: Some("https://evil.example.com".to_string()),
        title: None,
    };
    let err = links.update(&mallory, link.id, change).await.unwrap_err();
    assert!(matches!(err, ServiceError::LinkNotFound));

    let err = links.list(&mallory, "work").await.unwrap_err();
    assert!(matches!(err, ServiceError::DirectoryNotFound));

    assert_eq!(links.list(&alice, "work").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_link() {
    let store = InMemoryStore::new();
    let ctx = memory_context(&store);
    let phone = registered(&ctx).await;
    DirectoryService::new(&ctx).add(&phone, "work").await.unwrap();
    let links = LinkService::new(&ctx);
    let link = links
        .save(&phone, "work", NewLink::new("https://docs.rs", "Docs"))
        .await
        .unwrap();

    links.delete(&phone, link.id).await.unwrap();
    assert!(links.list(&phone, "work").await.unwrap().is_empty());

    let err = links.delete(&phone, link.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::LinkNotFound));
}
