use chrono::{Duration, Utc};
use viu_lib::domain::entities::{AuthUser, Notification, Session};

pub fn session(user_id: &str, kind: Option<viu_lib::domain::entities::UserKind>) -> Session {
    Session {
        access_token: format!("access-{user_id}"),
        refresh_token: format!("refresh-{user_id}"),
        expires_at: Some(Utc::now() + Duration::hours(1)),
        user: AuthUser {
            id: user_id.to_string(),
            email: Some(format!("{user_id}@example.com")),
            kind,
        },
    }
}

pub fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        title: Some(format!("Notificação {id}")),
        message: None,
        created_at: Utc::now(),
        read,
        kind: None,
        link: None,
    }
}

