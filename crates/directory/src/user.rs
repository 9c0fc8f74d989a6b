use serde::{Deserialize, Serialize};

use usuarios_core::{DomainError, DomainResult, Entity, UserId};

/// A user record as exposed over the API.
///
/// Wire names follow the public contract (`nombre`, `email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(rename = "nombre")]
    name: String,
    email: String,
}

impl User {
    /// Materialize a record from validated input and a store-assigned id.
    pub fn new(id: UserId, data: NewUser) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Apply a partial update. Fields absent from the patch are left untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    /// Case-insensitive substring match against the user's name.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        ensure_present("nombre", &name)?;
        ensure_present("email", &email)?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Partial update. Supplied values are taken as-is; absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<String>,
}

impl UserPatch {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }
}

fn ensure_present(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Records loaded into a fresh directory at process start.
pub fn seed_users() -> Vec<User> {
    [
        (1, "Juan", "juan@ejemplo.com"),
        (2, "María", "maria@ejemplo.com"),
        (3, "Carlos", "carlos@ejemplo.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}
