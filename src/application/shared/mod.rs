#![allow(unused_imports)]

pub mod collection;
pub mod optimistic;

pub use collection::{CollectionStore, ViewState};
pub use optimistic::optimistic_mutate;
