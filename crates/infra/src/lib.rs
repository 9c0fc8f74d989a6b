//! Infrastructure layer: storage adapters behind the user collection.

pub mod user_store;

pub use user_store::{InMemoryUserStore, StoreError, UserStore};
