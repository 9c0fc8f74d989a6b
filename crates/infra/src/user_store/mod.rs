//! User collection storage boundary.
//!
//! Route logic talks to `UserStore` only, so a real datastore can replace the
//! in-memory collection without touching handlers.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use r#trait::{StoreError, UserStore};
