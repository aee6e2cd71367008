#![allow(unused_imports)]

pub mod auth_gateway;
pub mod blob_storage;
pub mod client;
pub mod error;
pub mod query;
pub mod repositories;
pub mod rows;

pub use auth_gateway::GoTrueGateway;
pub use blob_storage::SupabaseStorage;
pub use client::{BearerToken, SupabaseClient};
pub use error::RemoteError;
pub use query::{Query, SortDir};
