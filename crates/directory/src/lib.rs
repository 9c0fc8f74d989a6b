//! User directory domain: the `User` entity and its validated inputs.

pub mod user;

pub use user::{seed_users, NewUser, User, UserPatch};
