//! The Stadium record and its write payload.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Maximum length (in characters) of every string field.
pub const MAX_TEXT_LEN: usize = 100;

/// Inclusive upper bound for `capacity`.
pub const MAX_CAPACITY: i32 = 200_000;

/// A persisted stadium, as returned by the store and serialized on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Stadium {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub city: String,
    pub state: String,
    pub capacity: i32,
}

impl fmt::Display for Stadium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A validated, normalized creation/update payload.
///
/// Built only through [`CreateStadiumRequest::new`] or
/// [`crate::domain::validation::validate_create_payload`]; the fields are
/// private, so every value a store receives has a trimmed non-blank name,
/// non-blank strings of at most [`MAX_TEXT_LEN`] characters and a capacity in
/// `0..=MAX_CAPACITY`.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CreateStadiumRequest {
    name: String,
    sport: String,
    city: String,
    state: String,
    /// Omitted or `null` is stored as 0.
    capacity: i32,
}

impl CreateStadiumRequest {
    /// Assembles a request from values that already passed validation.
    pub(crate) fn from_validated(
        name: String,
        sport: String,
        city: String,
        state: String,
        capacity: i32,
    ) -> Self {
        Self {
            name,
            sport,
            city,
            state,
            capacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Builds the stored record for `id`, copying every writable field.
    pub fn into_stadium(self, id: i64) -> Stadium {
        Stadium {
            id,
            name: self.name,
            sport: self.sport,
            city: self.city,
            state: self.state,
            capacity: self.capacity,
        }
    }
}
