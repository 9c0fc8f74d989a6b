use std::sync::Arc;

use usuarios_directory::seed_users;
use usuarios_infra::{InMemoryUserStore, UserStore};

/// Shared handler dependencies.
///
/// The store is injected rather than global so a persistent implementation can
/// be swapped in without touching route logic.
#[derive(Clone)]
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// In-memory wiring (dev/test), optionally preloaded with the seed records.
    pub fn in_memory(seed: bool) -> Self {
        let store = if seed {
            InMemoryUserStore::with_users(seed_users())
        } else {
            InMemoryUserStore::new()
        };
        Self::new(Arc::new(store))
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}
