use std::sync::RwLock;

use usuarios_core::{Entity, UserId};
use usuarios_directory::{NewUser, User, UserPatch};

use super::r#trait::{StoreError, UserStore};

#[derive(Debug)]
struct Collection {
    users: Vec<User>,
    next_id: Option<UserId>,
}

/// In-memory user collection for dev/tests.
///
/// One lock covers both the records and the id counter, so concurrent creates
/// cannot hand out the same id. The counter only moves forward: deleting the
/// highest id never frees it for reuse.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Collection>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Start from existing records (e.g. seed data), keeping their order.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = match users.iter().map(Entity::id).max() {
            Some(max) => max.next(),
            None => Some(UserId::FIRST),
        };
        Self {
            inner: RwLock::new(Collection { users, next_id }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> Result<Vec<User>, StoreError> {
        let c = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(c.users.clone())
    }

    fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let c = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(c.users.iter().find(|u| u.id() == id).cloned())
    }

    fn create(&self, data: NewUser) -> Result<User, StoreError> {
        let mut c = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = c.next_id.ok_or(StoreError::IdsExhausted)?;
        let user = User::new(id, data);
        c.users.push(user.clone());
        c.next_id = id.next();
        tracing::debug!(user_id = %id, "user appended to collection");
        Ok(user)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut c = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let user = c
            .users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    fn delete(&self, id: UserId) -> Result<User, StoreError> {
        let mut c = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let idx = c
            .users
            .iter()
            .position(|u| u.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(c.users.remove(idx))
    }

    fn search_by_name(&self, needle: &str) -> Result<Vec<User>, StoreError> {
        let c = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(c.users.iter().filter(|u| u.name_matches(needle)).cloned().collect())
    }
}
