mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::mocks::FakeAuthGateway;
use viu_lib::application::ports::SecureStore;
use viu_lib::application::AuthService;
use viu_lib::domain::entities::UserKind;
use viu_lib::infrastructure::MemorySecureStore;
use viu_lib::presentation::deep_link::{AppRoute, DeepLinkHandler};

const REDIRECT: &str = "com.viu.app://auth/callback";

fn auth(gateway: Arc<FakeAuthGateway>, store: Arc<MemorySecureStore>) -> Arc<AuthService> {
    Arc::new(AuthService::new(gateway, store, REDIRECT.to_string()))
}

#[tokio::test]
async fn cold_start_restores_the_persisted_session() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let store = Arc::new(MemorySecureStore::new());
    store.set("viu:refresh_token", "refresh-user-1").await.unwrap();

    let auth = auth(gateway, store);
    assert!(auth.current_state().loading);

    auth.init().await;
    let state = auth.current_state();
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[tokio::test]
async fn revoked_refresh_token_ends_signed_out() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    gateway.refresh_accepted.store(false, Ordering::SeqCst);
    let store = Arc::new(MemorySecureStore::new());
    store.set("viu:refresh_token", "stale").await.unwrap();

    let auth = auth(gateway, store.clone());
    auth.init().await;

    let state = auth.current_state();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(store.get("viu:refresh_token").await.unwrap(), None);
}

#[tokio::test]
async fn designer_callback_lands_on_home() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=good-code")
        .await;
    assert_eq!(route, Some(AppRoute::Home));
}

#[tokio::test]
async fn cliente_callback_falls_back_to_links() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Client)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=good-code")
        .await;
    assert_eq!(route, Some(AppRoute::Links));
}

#[tokio::test]
async fn next_parameter_overrides_the_kind_default() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=good-code&next=%2Flinks")
        .await;
    assert_eq!(route, Some(AppRoute::Links));
}

#[tokio::test]
async fn protocol_relative_next_is_ignored() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=good-code&next=%2F%2Fevil.example")
        .await;
    assert_eq!(route, Some(AppRoute::Home));
}

#[tokio::test]
async fn failed_exchange_routes_to_login_with_a_tag() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=bad-code")
        .await;
    assert_eq!(
        route,
        Some(AppRoute::Login {
            tag: Some("oauth_exchange_failed".to_string())
        })
    );
}

#[tokio::test]
async fn otp_verification_takes_precedence_over_code() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?token_hash=good-hash&type=signup&code=bad-code")
        .await;
    assert_eq!(route, Some(AppRoute::Home));
}

#[tokio::test]
async fn expired_token_hash_reports_confirmation_failed() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?token_hash=stale&type=signup")
        .await;
    assert_eq!(
        route,
        Some(AppRoute::Login {
            tag: Some("confirmation_failed".to_string())
        })
    );
}

#[tokio::test]
async fn callback_without_credentials_requires_a_session() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    let handler = DeepLinkHandler::new(auth);

    let route = handler.handle("com.viu.app://auth/callback").await;
    assert_eq!(
        route,
        Some(AppRoute::Login {
            tag: Some("no_session".to_string())
        })
    );
}

#[tokio::test]
async fn tipo_parameter_is_written_back_to_auth_metadata() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway.clone(), Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let route = handler
        .handle("com.viu.app://auth/callback?code=good-code&tipo=CLIENTE")
        .await;
    assert_eq!(route, Some(AppRoute::Links));
    assert_eq!(
        gateway.kind_updates.lock().unwrap().as_slice(),
        &[UserKind::Client]
    );
}

#[tokio::test]
async fn only_the_first_callback_is_handled() {
    let gateway = Arc::new(FakeAuthGateway::new(Some(UserKind::Designer)));
    let auth = auth(gateway, Arc::new(MemorySecureStore::new()));
    auth.start_pkce().await;
    let handler = DeepLinkHandler::new(auth);

    let first = handler
        .handle("com.viu.app://auth/callback?code=good-code")
        .await;
    assert!(first.is_some());

    let second = handler
        .handle("com.viu.app://auth/callback?code=good-code")
        .await;
    assert_eq!(second, None);
}
