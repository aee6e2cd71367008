use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Notification;
use crate::presentation::deep_link::{route_for_path, AppRoute};
use crate::presentation::dto::Validate;
use crate::shared::validation::require_non_empty;

#[derive(Debug, Clone, Deserialize)]
pub struct SetNotificationReadRequest {
    pub notification_id: String,
    pub lida: bool,
}

impl Validate for SetNotificationReadRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("notification_id", &self.notification_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub lida: bool,
    pub tipo: Option<String>,
    pub link: Option<String>,
    /// Internal screen the link resolves to, when it is an app path.
    pub rota: Option<String>,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        let rota = notification
            .link
            .as_deref()
            .and_then(route_for_path)
            .map(|route| match route {
                AppRoute::Home => "home".to_string(),
                AppRoute::Links => "links".to_string(),
                AppRoute::Login { .. } => "login".to_string(),
            });
        Self {
            id: notification.id.clone(),
            titulo: notification.title.clone(),
            mensagem: notification.message.clone(),
            criado_em: notification.created_at,
            lida: notification.read,
            tipo: notification.kind.clone(),
            link: notification.link.clone(),
            rota,
        }
    }
}
