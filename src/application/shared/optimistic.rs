use super::collection::CollectionStore;
use crate::shared::error::AppError;
use std::future::Future;

/// Applies a local edit immediately, then confirms it remotely.
///
/// On remote failure the list is restored to its pre-edit snapshot and the
/// failure callback runs before the error is returned, so every caller
/// surfaces the rollback to the user.
pub async fn optimistic_mutate<T, Fut>(
    store: &CollectionStore<T>,
    patch: impl FnOnce(&mut Vec<T>),
    remote: Fut,
    on_failure: impl FnOnce(&AppError),
) -> Result<(), AppError>
where
    T: Clone + Send + Sync,
    Fut: Future<Output = Result<(), AppError>>,
{
    let before = store.items().await;
    store.mutate(patch).await;
    match remote.await {
        Ok(()) => Ok(()),
        Err(err) => {
            store.restore(before).await;
            on_failure(&err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn success_keeps_the_patch() {
        let store: CollectionStore<u32> = CollectionStore::new();
        let gen = store.begin_fetch().await;
        store.apply_refresh(gen, vec![1, 2]).await;

        let result = optimistic_mutate(
            &store,
            |items| items.push(3),
            async { Ok(()) },
            |_| panic!("failure callback on success"),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(store.items().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failure_rolls_back_and_notifies() {
        let store: CollectionStore<u32> = CollectionStore::new();
        let gen = store.begin_fetch().await;
        store.apply_refresh(gen, vec![1, 2]).await;

        let notified = AtomicBool::new(false);
        let result = optimistic_mutate(
            &store,
            |items| items.clear(),
            async { Err(AppError::Network("timeout".into())) },
            |_| notified.store(true, Ordering::SeqCst),
        )
        .await;

        assert!(result.is_err());
        assert!(notified.load(Ordering::SeqCst));
        assert_eq!(store.items().await, vec![1, 2]);
    }
}
