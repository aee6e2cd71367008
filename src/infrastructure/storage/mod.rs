#![allow(unused_imports)]

pub mod preference_store;
pub mod secure_store;

pub use preference_store::JsonPreferenceStore;
pub use secure_store::{KeyringStore, MemorySecureStore};
