/// Rows fetched per page on paginated collections.
pub const PAGE_SIZE: u32 = 20;

/// Storage bucket holding art files, previews and avatars.
pub const BUCKET_UPLOADS: &str = "uploads";

/// Storage bucket holding audio feedback recordings.
pub const BUCKET_AUDIOS: &str = "audios";

/// Key the preferences document is stored under on device.
pub const PREFS_KEY: &str = "app:prefs:v1";

/// Custom URL scheme registered for auth callbacks and deep links.
pub const APP_SCHEME: &str = "com.viu.app";

/// Length of client-generated share-link tokens.
pub const SHARE_TOKEN_LEN: usize = 24;
