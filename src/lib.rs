pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use shared::config::AppConfig;
pub use shared::error::AppError;
pub use state::AppState;

/// Call once from the shell before building an [`AppState`].
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viu_lib=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
