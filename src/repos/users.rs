//! User repository.

use std::sync::Arc;

use crate::models::{ExerciseId, User, UserId};
use crate::storage::{DocumentStore, StorageError};

/// Repository for user records.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All users, unfiltered, in creation order.
    pub async fn list_all(&self) -> Vec<User> {
        self.store.list_users().await
    }

    /// Look up a user by exact name, creating it when absent.
    ///
    /// Idempotent: repeated calls with the same name return the same
    /// record (the store serializes the lookup and the create).
    pub async fn find_or_create_by_username(&self, username: &str) -> Result<User, StorageError> {
        let (user, _created) = self.store.find_or_insert_user(username).await?;
        Ok(user)
    }

    /// Look up a user by id. `None` means no such user, not a storage
    /// fault; callers surface it as a not-found condition.
    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.store.find_user_by_id(id).await
    }

    /// Append an exercise reference to the user's list and persist it.
    /// Returns the updated user, or `None` if the user no longer exists.
    pub async fn append_exercise_ref(
        &self,
        user_id: &UserId,
        exercise_id: ExerciseId,
    ) -> Result<Option<User>, StorageError> {
        self.store.push_exercise_ref(user_id, exercise_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> UserRepository {
        let store = DocumentStore::open(StorageConfig::new(dir.path().to_path_buf())).unwrap();
        UserRepository::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let first = repo.find_or_create_by_username("alice").await.unwrap();
        let second = repo.find_or_create_by_username("alice").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        assert!(repo.find_by_id("000000000000000000000000").await.is_none());
    }

    #[tokio::test]
    async fn test_append_exercise_ref() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let alice = repo.find_or_create_by_username("alice").await.unwrap();
        let updated = repo
            .append_exercise_ref(&alice.id, "ex-1".into())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.exercises, vec!["ex-1".into()]);
    }
}
