//! User model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, ExerciseId, UserId};

/// A registered user.
///
/// The user owns the *relation* to its exercises, not the exercises
/// themselves: `exercises` is an ordered list of weak references (ids)
/// in the order the exercises were logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation
    pub id: UserId,

    /// Display name, supplied by the caller
    pub username: String,

    /// Ids of logged exercises, in append order
    #[serde(default)]
    pub exercises: Vec<ExerciseId>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh id and an empty exercise list.
    pub fn new(username: String) -> Self {
        Self {
            id: EntityId::generate(),
            username,
            exercises: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
