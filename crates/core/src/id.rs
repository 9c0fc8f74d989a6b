//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user record.
///
/// Positive integer assigned by the store; never supplied by clients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: UserId = UserId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u64::from_str` accepts a leading '+'; ids are digits only.
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!("UserId: {s:?} is not a number")));
        }
        let value = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("UserId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::new(42));
    }

    #[test]
    fn rejects_negative_and_non_numeric_input() {
        for raw in ["-1", "+3", "abc", "", "1.5", " 3"] {
            match raw.parse::<UserId>() {
                Err(DomainError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn next_stops_at_the_end_of_the_id_space() {
        assert_eq!(UserId::FIRST.next(), Some(UserId::new(2)));
        assert_eq!(UserId::new(u64::MAX).next(), None);
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
