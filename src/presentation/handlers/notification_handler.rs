use crate::{
    application::NotificationService,
    presentation::dto::{
        notification_dto::{NotificationResponse, SetNotificationReadRequest},
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;
use tracing::warn;

pub struct NotificationHandler {
    notification_service: Arc<NotificationService>,
}

impl NotificationHandler {
    pub fn new(notification_service: Arc<NotificationService>) -> Self {
        Self {
            notification_service,
        }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.notification_service.refresh().await
    }

    pub async fn load_more(&self) -> Result<(), AppError> {
        self.notification_service.load_more().await
    }

    pub async fn set_only_unread(&self, only_unread: bool) -> Result<(), AppError> {
        self.notification_service.set_only_unread(only_unread).await
    }

    pub async fn list(&self) -> (Vec<NotificationResponse>, bool) {
        let view = self.notification_service.view().await;
        let responses = view.items.iter().map(NotificationResponse::from).collect();
        (responses, view.has_more)
    }

    pub async fn toggle_read(&self, request: SetNotificationReadRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.notification_service
            .toggle_read(&request.notification_id, |error| {
                warn!("notification read toggle reverted: {error}");
            })
            .await
    }

    pub async fn mark_all_read(&self) -> Result<(), AppError> {
        self.notification_service
            .mark_all_read(|error| {
                warn!("mark-all-read reverted: {error}");
            })
            .await
    }
}
