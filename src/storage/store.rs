//! In-memory document store with JSONL write-through.
//!
//! The store is the single shared persistence handle: opened once before
//! the server starts, injected into the repositories, and dropped on
//! shutdown. Reads are served from memory; every mutation persists before
//! the request completes. Mutating primitives hold the write lock for the
//! whole read-then-write step, which is what makes `find_or_insert_user`
//! an atomic upsert and `push_exercise_ref` an atomic append.

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Exercise, ExerciseId, User, UserId};

use super::{Collection, JsonlReader, JsonlWriter, StorageConfig, StorageError};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Document store over the users and exercises collections.
pub struct DocumentStore {
    config: StorageConfig,
    inner: RwLock<Inner>,
}

impl DocumentStore {
    /// Open the store, loading both collections from disk.
    pub fn open(config: StorageConfig) -> Result<Self, StorageError> {
        let users = JsonlReader::<User>::for_collection(&config, Collection::Users).read_all()?;
        let exercises =
            JsonlReader::<Exercise>::for_collection(&config, Collection::Exercises).read_all()?;

        info!(
            "Opened store at {:?}: {} users, {} exercises",
            config.data_dir,
            users.len(),
            exercises.len()
        );

        Ok(Self {
            config,
            inner: RwLock::new(Inner { users, exercises }),
        })
    }

    /// All users, in creation order.
    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Look up a user by id.
    pub async fn find_user_by_id(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
    }

    /// Fetch the user with this exact username, creating it if absent.
    ///
    /// Runs under the write lock, so two concurrent calls with the same
    /// name cannot both create: usernames stay unique. Returns the user
    /// and whether it was created by this call.
    pub async fn find_or_insert_user(&self, username: &str) -> Result<(User, bool), StorageError> {
        let mut inner = self.inner.write().await;

        if let Some(user) = inner.users.iter().find(|u| u.username == username) {
            return Ok((user.clone(), false));
        }

        let user = User::new(username.to_string());
        JsonlWriter::for_collection(&self.config, Collection::Users).append(&user)?;
        inner.users.push(user.clone());

        debug!("Created user {} ({})", user.username, user.id);
        Ok((user, true))
    }

    /// Append an exercise reference to a user's list and persist the
    /// updated collection. Returns the updated user, or `None` if no user
    /// has that id.
    pub async fn push_exercise_ref(
        &self,
        user_id: &UserId,
        exercise_id: ExerciseId,
    ) -> Result<Option<User>, StorageError> {
        let mut inner = self.inner.write().await;

        let Some(user) = inner.users.iter_mut().find(|u| &u.id == user_id) else {
            return Ok(None);
        };
        user.exercises.push(exercise_id);
        let updated = user.clone();

        JsonlWriter::for_collection(&self.config, Collection::Users).write_all(&inner.users)?;
        Ok(Some(updated))
    }

    /// Persist a new exercise record.
    pub async fn insert_exercise(&self, exercise: Exercise) -> Result<Exercise, StorageError> {
        let mut inner = self.inner.write().await;

        JsonlWriter::for_collection(&self.config, Collection::Exercises).append(&exercise)?;
        inner.exercises.push(exercise.clone());

        debug!("Created exercise {}", exercise.id);
        Ok(exercise)
    }

    /// Look up an exercise by id.
    pub async fn find_exercise(&self, id: &ExerciseId) -> Option<Exercise> {
        self.inner
            .read()
            .await
            .exercises
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> DocumentStore {
        DocumentStore::open(StorageConfig::new(dir.path().to_path_buf())).unwrap()
    }

    #[tokio::test]
    async fn test_find_or_insert_creates_once() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let (alice, created) = store.find_or_insert_user("alice").await.unwrap();
        assert!(created);

        let (again, created) = store.find_or_insert_user("alice").await.unwrap();
        assert!(!created);
        assert_eq!(again.id, alice.id);

        assert_eq!(store.list_users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_usernames_get_distinct_users() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let (alice, _) = store.find_or_insert_user("alice").await.unwrap();
        let (bob, _) = store.find_or_insert_user("bob").await.unwrap();

        assert_ne!(alice.id, bob.id);
        assert_eq!(store.list_users().await.len(), 2);
    }

    #[tokio::test]
    async fn test_find_user_by_id() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let (alice, _) = store.find_or_insert_user("alice").await.unwrap();

        let found = store.find_user_by_id(alice.id.as_str()).await.unwrap();
        assert_eq!(found.username, "alice");

        assert!(store
            .find_user_by_id("000000000000000000000000")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_push_exercise_ref_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let (alice, _) = store.find_or_insert_user("alice").await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let e1 = store
            .insert_exercise(Exercise::new("run".into(), 30, date))
            .await
            .unwrap();
        let e2 = store
            .insert_exercise(Exercise::new("swim".into(), 45, date))
            .await
            .unwrap();

        store
            .push_exercise_ref(&alice.id, e1.id.clone())
            .await
            .unwrap()
            .unwrap();
        let updated = store
            .push_exercise_ref(&alice.id, e2.id.clone())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.exercises, vec![e1.id, e2.id]);
    }

    #[tokio::test]
    async fn test_push_exercise_ref_unknown_user() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let result = store
            .push_exercise_ref(&"missing".into(), "ex-1".into())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::new(dir.path().to_path_buf());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let (alice_id, exercise_id) = {
            let store = DocumentStore::open(config.clone()).unwrap();
            let (alice, _) = store.find_or_insert_user("alice").await.unwrap();
            let ex = store
                .insert_exercise(Exercise::new("run".into(), 30, date))
                .await
                .unwrap();
            store
                .push_exercise_ref(&alice.id, ex.id.clone())
                .await
                .unwrap();
            (alice.id, ex.id)
        };

        let store = DocumentStore::open(config).unwrap();
        let alice = store.find_user_by_id(alice_id.as_str()).await.unwrap();
        assert_eq!(alice.exercises, vec![exercise_id.clone()]);

        let ex = store.find_exercise(&exercise_id).await.unwrap();
        assert_eq!(ex.description, "run");
        assert_eq!(ex.duration, 30);
    }

    #[tokio::test]
    async fn test_find_exercise_missing() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.find_exercise(&"nope".into()).await.is_none());
    }
}
