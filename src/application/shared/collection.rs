use crate::domain::constants::PAGE_SIZE;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Observable state of one remote-backed list.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub page: u32,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            page: 0,
        }
    }
}

/// Shared list store with a fetch generation counter.
///
/// Every fetch bumps the generation before going to the network and hands the
/// observed value back when applying the result; a response carrying a stale
/// generation is discarded, so rapid refreshes never interleave.
pub struct CollectionStore<T> {
    state: RwLock<ViewState<T>>,
    generation: AtomicU64,
}

impl<T: Clone + Send + Sync> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> CollectionStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> ViewState<T> {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    /// Marks a fetch as started and returns the generation it must present
    /// when applying its outcome.
    pub async fn begin_fetch(&self) -> u64 {
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        gen
    }

    fn is_current(&self, gen: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == gen
    }

    /// Replaces the whole list (page 0 of a refresh). Stale generations are
    /// ignored and reported as such.
    pub async fn apply_refresh(&self, gen: u64, items: Vec<T>) -> bool {
        if !self.is_current(gen) {
            return false;
        }
        let mut state = self.state.write().await;
        state.has_more = items.len() as u32 >= PAGE_SIZE;
        state.items = items;
        state.page = 0;
        state.loading = false;
        state.error = None;
        true
    }

    /// Appends one page fetched with [`begin_fetch`]. Stale generations are
    /// ignored.
    pub async fn apply_page(&self, gen: u64, page: u32, items: Vec<T>) -> bool {
        if !self.is_current(gen) {
            return false;
        }
        let mut state = self.state.write().await;
        state.has_more = items.len() as u32 >= PAGE_SIZE;
        state.items.extend(items);
        state.page = page;
        state.loading = false;
        state.error = None;
        true
    }

    /// Records a fetch failure. Stale generations are ignored.
    pub async fn apply_error(&self, gen: u64, message: String) -> bool {
        if !self.is_current(gen) {
            return false;
        }
        let mut state = self.state.write().await;
        state.loading = false;
        state.error = Some(message);
        true
    }

    /// In-place edit of the current items, for local mutations that already
    /// know what the remote outcome will be.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut state = self.state.write().await;
        f(&mut state.items)
    }

    /// Replaces the items wholesale, bypassing the generation guard. Used to
    /// roll back an optimistic edit.
    pub async fn restore(&self, items: Vec<T>) {
        let mut state = self.state.write().await;
        state.items = items;
    }

    pub async fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        *state = ViewState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stale_generation_is_discarded() {
        let store: CollectionStore<u32> = CollectionStore::new();
        let old = store.begin_fetch().await;
        let new = store.begin_fetch().await;
        assert!(!store.apply_refresh(old, vec![1, 2, 3]).await);
        assert!(store.apply_refresh(new, vec![9]).await);
        assert_eq!(store.items().await, vec![9]);
    }

    #[tokio::test]
    async fn short_page_ends_pagination() {
        let store: CollectionStore<u32> = CollectionStore::new();
        let gen = store.begin_fetch().await;
        store.apply_refresh(gen, vec![1, 2, 3]).await;
        let state = store.snapshot().await;
        assert!(!state.has_more);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn error_keeps_previous_items() {
        let store: CollectionStore<u32> = CollectionStore::new();
        let gen = store.begin_fetch().await;
        store.apply_refresh(gen, vec![1, 2]).await;
        let gen = store.begin_fetch().await;
        store.apply_error(gen, "offline".into()).await;
        let state = store.snapshot().await;
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.error.as_deref(), Some("offline"));
    }
}
