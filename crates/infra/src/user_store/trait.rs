use std::sync::Arc;

use thiserror::Error;

use usuarios_core::UserId;
use usuarios_directory::{NewUser, User, UserPatch};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(UserId),

    #[error("user collection lock poisoned")]
    LockPoisoned,

    #[error("user id space exhausted")]
    IdsExhausted,
}

/// Ordered user collection.
///
/// Implementations preserve insertion order in `list`/`search` and assign ids
/// themselves; callers never pick an id.
pub trait UserStore: Send + Sync {
    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Append a new record and return it with its assigned id.
    fn create(&self, data: NewUser) -> Result<User, StoreError>;

    /// Apply a partial update in place and return the updated record.
    fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError>;

    /// Remove a record and return it.
    fn delete(&self, id: UserId) -> Result<User, StoreError>;

    /// Records whose name contains `needle`, ignoring case.
    fn search_by_name(&self, needle: &str) -> Result<Vec<User>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|u| u.name_matches(needle))
            .collect())
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self) -> Result<Vec<User>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        (**self).get(id)
    }

    fn create(&self, data: NewUser) -> Result<User, StoreError> {
        (**self).create(data)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: UserId) -> Result<User, StoreError> {
        (**self).delete(id)
    }

    fn search_by_name(&self, needle: &str) -> Result<Vec<User>, StoreError> {
        (**self).search_by_name(needle)
    }
}
