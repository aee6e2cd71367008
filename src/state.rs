use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::application::{
    ArtService, AuthService, ClientService, CountersService, FeedbackService, NotificationService,
    PreferencesService, ProfileService, ProjectService, SharedLinkService, TaskService,
};
use crate::infrastructure::{
    BearerToken, GoTrueGateway, JsonPreferenceStore, KeyringStore, RemoteArtRepository,
    RemoteCounterQueries, RemoteFeedbackRepository, RemoteNotificationRepository,
    RemoteProjectRepository, RemoteSharedLinkRepository, RemoteTaskRepository,
    RemoteUserRepository, SupabaseClient, SupabaseStorage,
};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

/// Composition root. Owns every service plus the background tasks; the
/// mobile shell keeps exactly one of these alive.
pub struct AppState {
    pub config: AppConfig,
    pub auth: Arc<AuthService>,
    pub projects: Arc<ProjectService>,
    pub arts: Arc<ArtService>,
    pub feedbacks: Arc<FeedbackService>,
    pub tasks: Arc<TaskService>,
    pub clients: Arc<ClientService>,
    pub profile: Arc<ProfileService>,
    pub links: Arc<SharedLinkService>,
    pub notifications: Arc<NotificationService>,
    pub counters: Arc<CountersService>,
    pub preferences: Arc<PreferencesService>,
    background: Mutex<Vec<JoinHandle<()>>>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        let bearer = BearerToken::new();
        let client = Arc::new(SupabaseClient::new(&config.remote, bearer.clone())?);

        let gateway = Arc::new(GoTrueGateway::new(client.clone()));
        let secure_store = Arc::new(KeyringStore::new());
        let blobs = Arc::new(SupabaseStorage::new(client.clone()));
        let preference_store = Arc::new(JsonPreferenceStore::new(&config.storage.data_dir).await?);

        let auth = Arc::new(AuthService::new(
            gateway,
            secure_store,
            config.links.auth_redirect_url.clone(),
        ));
        let users = Arc::new(RemoteUserRepository::new(client.clone()));

        let state = Self {
            auth,
            projects: Arc::new(ProjectService::new(Arc::new(RemoteProjectRepository::new(
                client.clone(),
            )))),
            arts: Arc::new(ArtService::new(
                Arc::new(RemoteArtRepository::new(client.clone())),
                blobs.clone(),
            )),
            feedbacks: Arc::new(FeedbackService::new(
                Arc::new(RemoteFeedbackRepository::new(client.clone())),
                blobs,
            )),
            tasks: Arc::new(TaskService::new(Arc::new(RemoteTaskRepository::new(
                client.clone(),
            )))),
            clients: Arc::new(ClientService::new(users.clone())),
            profile: Arc::new(ProfileService::new(users)),
            links: Arc::new(SharedLinkService::new(
                Arc::new(RemoteSharedLinkRepository::new(client.clone())),
                config.links.clone(),
            )),
            notifications: Arc::new(NotificationService::new(Arc::new(
                RemoteNotificationRepository::new(client.clone()),
            ))),
            counters: Arc::new(CountersService::new(
                Arc::new(RemoteCounterQueries::new(client)),
                config.sync.clone(),
            )),
            preferences: Arc::new(PreferencesService::new(preference_store)),
            config,
            background: Mutex::new(Vec::new()),
        };
        state.spawn_session_forwarder(bearer).await;
        Ok(state)
    }

    /// Restores the persisted session, loads preferences and starts the
    /// counters poller.
    pub async fn init(&self) -> Result<(), AppError> {
        info!("app state initializing");
        self.auth.init().await;
        self.preferences.init().await?;
        let poller = self.counters.spawn();
        self.background.lock().await.push(poller);
        Ok(())
    }

    /// Aborts background tasks and drops the published session. Safe to call
    /// more than once.
    pub async fn shutdown(&self) {
        info!("app state shutting down");
        for handle in self.background.lock().await.drain(..) {
            handle.abort();
        }
        self.auth.teardown();
    }

    /// Every session change is mirrored into the bearer cell so request
    /// authorization never lags behind auth state.
    async fn spawn_session_forwarder(&self, bearer: BearerToken) {
        let mut rx = self.auth.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                let token = rx
                    .borrow_and_update()
                    .session
                    .as_ref()
                    .map(|s| s.access_token.clone());
                bearer.set(token).await;
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
        self.background.lock().await.push(handle);
    }
}
