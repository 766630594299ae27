//! Exercise repository.

use std::sync::Arc;

use tracing::warn;

use crate::models::{Exercise, ExerciseId};
use crate::storage::{DocumentStore, StorageError};
use crate::validate::NewExercise;

/// Repository for exercise records.
#[derive(Clone)]
pub struct ExerciseRepository {
    store: Arc<DocumentStore>,
}

impl ExerciseRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a new exercise from a validated payload.
    pub async fn create(&self, payload: NewExercise) -> Result<Exercise, StorageError> {
        let exercise = Exercise::new(payload.description, payload.duration, payload.date);
        self.store.insert_exercise(exercise).await
    }

    /// Resolve a user's exercise references, preserving their order.
    ///
    /// A reference that no longer resolves (possible only after a partial
    /// storage failure) is skipped with a warning rather than failing the
    /// whole log.
    pub async fn resolve_refs(&self, refs: &[ExerciseId]) -> Vec<Exercise> {
        let mut exercises = Vec::with_capacity(refs.len());
        for id in refs {
            match self.store.find_exercise(id).await {
                Some(exercise) => exercises.push(exercise),
                None => warn!("Dangling exercise reference: {}", id),
            }
        }
        exercises
    }
}
