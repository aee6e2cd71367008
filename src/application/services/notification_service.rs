use crate::application::ports::{NotificationRepository, PageWindow};
use crate::application::shared::{optimistic_mutate, CollectionStore, ViewState};
use crate::domain::constants::PAGE_SIZE;
use crate::domain::entities::Notification;
use crate::shared::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
    store: Arc<CollectionStore<Notification>>,
    only_unread: AtomicBool,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(CollectionStore::new()),
            only_unread: AtomicBool::new(false),
        }
    }

    pub async fn view(&self) -> ViewState<Notification> {
        self.store.snapshot().await
    }

    pub fn only_unread(&self) -> bool {
        self.only_unread.load(Ordering::SeqCst)
    }

    /// Switches the unread-only filter and reloads from page zero. The
    /// filter is pushed into the query, not applied client-side.
    pub async fn set_only_unread(&self, only_unread: bool) -> Result<(), AppError> {
        self.only_unread.store(only_unread, Ordering::SeqCst);
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let gen = self.store.begin_fetch().await;
        let window = PageWindow::for_page(0, PAGE_SIZE);
        match self.repository.list_page(window, self.only_unread()).await {
            Ok(items) => {
                self.store.apply_refresh(gen, items).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    /// Fetches the next page and appends it; a no-op once the last page
    /// arrived short.
    pub async fn load_more(&self) -> Result<(), AppError> {
        let state = self.store.snapshot().await;
        if !state.has_more || state.loading {
            return Ok(());
        }
        let next_page = state.page + 1;
        let gen = self.store.begin_fetch().await;
        let window = PageWindow::for_page(next_page, PAGE_SIZE);
        match self.repository.list_page(window, self.only_unread()).await {
            Ok(items) => {
                self.store.apply_page(gen, next_page, items).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    /// Flips the read flag locally first; a remote failure restores it and
    /// reports through `on_failure`.
    pub async fn toggle_read(
        &self,
        id: &str,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        let current = self
            .store
            .items()
            .await
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.read)
            .ok_or_else(|| AppError::NotFound(format!("Notification {id} not found")))?;
        let target = id.to_string();
        optimistic_mutate(
            &self.store,
            move |items| {
                if let Some(item) = items.iter_mut().find(|n| n.id == target) {
                    item.read = !current;
                }
            },
            self.repository.set_read(id, !current),
            on_failure,
        )
        .await
    }

    /// Marks every loaded row read locally and the whole backlog remotely.
    pub async fn mark_all_read(
        &self,
        on_failure: impl FnOnce(&AppError),
    ) -> Result<(), AppError> {
        optimistic_mutate(
            &self.store,
            |items| {
                for item in items.iter_mut() {
                    item.read = true;
                }
            },
            self.repository.mark_all_read(),
            on_failure,
        )
        .await
    }
}
