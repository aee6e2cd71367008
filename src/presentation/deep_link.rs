use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::application::AuthService;
use crate::domain::constants::APP_SCHEME;
use crate::domain::entities::UserKind;

/// Screens the shell can be told to navigate to after a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Links,
    Login { tag: Option<String> },
}

impl AppRoute {
    fn login(tag: &str) -> Self {
        Self::Login {
            tag: Some(tag.to_string()),
        }
    }
}

/// Query parameters carried by an auth callback URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub token_hash: Option<String>,
    pub otp_type: Option<String>,
    pub next: Option<String>,
    pub tipo: Option<String>,
}

/// Accepts the registered custom scheme or an HTTPS universal link; anything
/// else is not a callback.
pub fn parse_callback(raw: &str) -> Option<CallbackParams> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != APP_SCHEME && url.scheme() != "https" {
        return None;
    }
    let mut params = CallbackParams::default();
    for (key, value) in url.query_pairs() {
        let value = value.into_owned();
        match key.as_ref() {
            "code" => params.code = Some(value),
            "token_hash" => params.token_hash = Some(value),
            "type" => params.otp_type = Some(value),
            "next" => params.next = Some(value),
            "tipo" => params.tipo = Some(value),
            _ => {}
        }
    }
    Some(params)
}

/// A `next` override must be an internal path: exactly one leading slash,
/// never `//host` (which a browser would treat as protocol-relative).
pub fn safe_next(value: &str) -> Option<&str> {
    if value.starts_with('/') && !value.starts_with("//") {
        Some(value)
    } else {
        None
    }
}

pub fn route_for_path(path: &str) -> Option<AppRoute> {
    match path.trim_end_matches('/') {
        "/dashboard" | "" => Some(AppRoute::Home),
        "/links" => Some(AppRoute::Links),
        _ => None,
    }
}

/// Handles the auth callback URL delivered by the OS. Each instance consumes
/// at most one URL; duplicates delivered by the shell are ignored.
pub struct DeepLinkHandler {
    auth: Arc<AuthService>,
    handled: AtomicBool,
}

impl DeepLinkHandler {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            handled: AtomicBool::new(false),
        }
    }

    pub async fn handle(&self, raw: &str) -> Option<AppRoute> {
        let params = parse_callback(raw)?;
        if self.handled.swap(true, Ordering::SeqCst) {
            debug!("callback already handled, ignoring {raw}");
            return None;
        }
        Some(self.resolve(params).await)
    }

    async fn resolve(&self, params: CallbackParams) -> AppRoute {
        if let (Some(token_hash), Some(otp_type)) = (&params.token_hash, &params.otp_type) {
            if let Err(error) = self.auth.verify_token_hash(token_hash, otp_type).await {
                warn!("otp verification failed: {error}");
                return AppRoute::login("confirmation_failed");
            }
        } else if let Some(code) = &params.code {
            if let Err(error) = self.auth.exchange_code(code).await {
                warn!("code exchange failed: {error}");
                return AppRoute::login("oauth_exchange_failed");
            }
        }

        let state = self.auth.current_state();
        let Some(session) = state.session else {
            return AppRoute::login("no_session");
        };

        let kind = match params.tipo.as_deref().and_then(UserKind::parse) {
            Some(kind) => {
                // Metadata write is best effort; the session already carries
                // the kind for this launch.
                if let Err(error) = self.auth.persist_user_kind(kind).await {
                    warn!("could not persist user kind: {error}");
                }
                Some(kind)
            }
            None => session.user.kind,
        };

        if let Some(route) = params
            .next
            .as_deref()
            .and_then(safe_next)
            .and_then(route_for_path)
        {
            return route;
        }

        match kind {
            Some(UserKind::Client) => AppRoute::Links,
            _ => AppRoute::Home,
        }
    }
}
