use std::sync::Arc;

use crate::repos::{ExerciseRepository, UserRepository};
use crate::storage::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub exercises: ExerciseRepository,
}

impl AppState {
    /// Build the state from the shared store handle.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            exercises: ExerciseRepository::new(store),
        }
    }
}
