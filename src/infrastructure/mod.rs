pub mod remote;
pub mod storage;

pub use remote::repositories::{
    RemoteArtRepository, RemoteCounterQueries, RemoteFeedbackRepository,
    RemoteNotificationRepository, RemoteProjectRepository, RemoteSharedLinkRepository,
    RemoteTaskRepository, RemoteUserRepository,
};
pub use remote::{BearerToken, GoTrueGateway, SupabaseClient, SupabaseStorage};
pub use storage::{JsonPreferenceStore, KeyringStore, MemorySecureStore};
