use std::sync::Arc;

use viu_lib::application::PreferencesService;
use viu_lib::infrastructure::JsonPreferenceStore;

#[tokio::test]
async fn preferences_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(JsonPreferenceStore::new(dir.path()).await.unwrap());
        let service = PreferencesService::new(store);
        service.init().await.unwrap();

        service.set_push_enabled(false).await.unwrap();
        service.toggle_language().await.unwrap();
    }

    let store = Arc::new(JsonPreferenceStore::new(dir.path()).await.unwrap());
    let service = PreferencesService::new(store);
    service.init().await.unwrap();

    let prefs = service.current().await;
    assert!(!prefs.push_enabled);
    assert!(prefs.email_enabled);
    assert_eq!(prefs.language, "en-US");
}

#[tokio::test]
async fn fresh_install_starts_from_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonPreferenceStore::new(dir.path()).await.unwrap());
    let service = PreferencesService::new(store);
    service.init().await.unwrap();

    let prefs = service.current().await;
    assert!(prefs.push_enabled);
    assert!(prefs.analytics_enabled);
    assert_eq!(prefs.language, "pt-BR");
}
