mod common;

use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{fixtures, mocks::MemoryNotificationRepo};
use viu_lib::application::NotificationService;

fn backlog(total: usize) -> Vec<viu_lib::domain::entities::Notification> {
    (0..total)
        .map(|i| fixtures::notification(&format!("n{i:02}"), i % 3 == 0))
        .collect()
}

#[tokio::test]
async fn pages_of_twenty_without_duplicates() {
    let repo = Arc::new(MemoryNotificationRepo::with_rows(backlog(45)));
    let service = NotificationService::new(repo.clone());

    service.refresh().await.unwrap();
    assert_eq!(service.view().await.items.len(), 20);
    assert!(service.view().await.has_more);

    service.load_more().await.unwrap();
    assert_eq!(service.view().await.items.len(), 40);
    assert!(service.view().await.has_more);

    service.load_more().await.unwrap();
    let view = service.view().await;
    assert_eq!(view.items.len(), 45);
    assert!(!view.has_more);

    let ids: HashSet<&str> = view.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), 45);

    // The short page ended pagination; further calls never hit the backend.
    let calls_before = repo.list_calls.load(Ordering::SeqCst);
    service.load_more().await.unwrap();
    assert_eq!(repo.list_calls.load(Ordering::SeqCst), calls_before);
}

#[tokio::test]
async fn unread_filter_reloads_from_the_first_page() {
    let repo = Arc::new(MemoryNotificationRepo::with_rows(backlog(30)));
    let service = NotificationService::new(repo);

    service.refresh().await.unwrap();
    service.load_more().await.unwrap();
    assert_eq!(service.view().await.items.len(), 30);

    service.set_only_unread(true).await.unwrap();
    let view = service.view().await;
    assert!(view.items.iter().all(|n| !n.read));
    assert_eq!(view.page, 0);
}

#[tokio::test]
async fn read_toggle_reverts_when_the_backend_fails() {
    let repo = Arc::new(MemoryNotificationRepo::with_rows(backlog(5)));
    let service = NotificationService::new(repo.clone());
    service.refresh().await.unwrap();

    let target = service.view().await.items[1].id.clone();
    let was_read = service
        .view()
        .await
        .items
        .iter()
        .find(|n| n.id == target)
        .unwrap()
        .read;

    repo.fail_writes.store(true, Ordering::SeqCst);
    let mut reported = false;
    let result = service.toggle_read(&target, |_| reported = true).await;

    assert!(result.is_err());
    assert!(reported);
    let after = service.view().await;
    assert_eq!(
        after.items.iter().find(|n| n.id == target).unwrap().read,
        was_read
    );
}

#[tokio::test]
async fn mark_all_read_flips_every_loaded_row() {
    let repo = Arc::new(MemoryNotificationRepo::with_rows(backlog(8)));
    let service = NotificationService::new(repo);
    service.refresh().await.unwrap();

    service.mark_all_read(|_| {}).await.unwrap();
    assert!(service.view().await.items.iter().all(|n| n.read));
}
