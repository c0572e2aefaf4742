use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::{seed_users, UserModel};
use crate::shared::AppError;

/// Trait for user store operations.
///
/// The store owns id assignment: `add` picks the next free id so that ids
/// stay unique across all live users. Lookups signal absence with
/// `Ok(None)` (or `Ok(false)` for `remove`); callers decide whether that
/// is a 404 or a 401.
#[async_trait]
pub trait UserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<UserModel>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, AppError>;
    async fn add(&self, name: &str) -> Result<UserModel, AppError>;
    async fn update_name(&self, id: i64, name: &str) -> Result<Option<UserModel>, AppError>;
    async fn remove(&self, id: i64) -> Result<bool, AppError>;
    async fn list_all(&self) -> Result<Vec<UserModel>, AppError>;
}

/// In-memory implementation of UserRepository.
///
/// Data lives for the process lifetime only. A `Vec` keeps insertion
/// order so listings are stable across calls.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserModel>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with the given users
    pub fn with_users(users: Vec<UserModel>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Creates a store holding the three seed users
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Returns the current number of users in the store
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<UserModel>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn add(&self, name: &str) -> Result<UserModel, AppError> {
        let mut users = self.users.lock().unwrap();

        // Max existing id + 1, never a fixed constant
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = UserModel::new(id, name);
        users.push(user.clone());

        debug!(id, name = %user.name, "User added to store");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn update_name(&self, id: i64, name: &str) -> Result<Option<UserModel>, AppError> {
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = name.to_string();
                debug!(id, name = %user.name, "User renamed");
                Ok(Some(user.clone()))
            }
            None => {
                debug!(id, "User not found for update");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();

        let count_before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() != count_before;

        debug!(id, removed, "User removal attempted");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<UserModel>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let repo = InMemoryUserRepository::seeded();

        assert_eq!(repo.user_count(), 3);

        let users = repo.list_all().await.unwrap();
        assert_eq!(users[0], UserModel::new(1, "Amir"));
        assert_eq!(users[1], UserModel::new(2, "John"));
        assert_eq!(users[2], UserModel::new(3, "Stacy"));
    }

    #[tokio::test]
    async fn test_find_by_name_and_id() {
        let repo = InMemoryUserRepository::seeded();

        let by_name = repo.find_by_name("Stacy").await.unwrap();
        assert_eq!(by_name, Some(UserModel::new(3, "Stacy")));

        let by_id = repo.find_by_id(2).await.unwrap();
        assert_eq!(by_id, Some(UserModel::new(2, "John")));

        assert!(repo.find_by_name("Nobody").await.unwrap().is_none());
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_assigns_next_free_id() {
        let repo = InMemoryUserRepository::seeded();

        let user = repo.add("Jane").await.unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "Jane");

        // The new id collides with no existing one
        let users = repo.list_all().await.unwrap();
        let ids: std::collections::HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[tokio::test]
    async fn test_add_to_empty_store_starts_at_one() {
        let repo = InMemoryUserRepository::new();

        let user = repo.add("First").await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_repeated_adds_never_collide() {
        let repo = InMemoryUserRepository::seeded();

        repo.add("Jane").await.unwrap();
        repo.add("Jane").await.unwrap();
        repo.add("Jane").await.unwrap();

        let users = repo.list_all().await.unwrap();
        let ids: std::collections::HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[tokio::test]
    async fn test_update_name() {
        let repo = InMemoryUserRepository::seeded();

        let updated = repo.update_name(2, "Jon").await.unwrap();
        assert_eq!(updated, Some(UserModel::new(2, "Jon")));

        let user = repo.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(user.name, "Jon");
    }

    #[tokio::test]
    async fn test_update_absent_id_leaves_store_unchanged() {
        let repo = InMemoryUserRepository::seeded();
        let before = repo.list_all().await.unwrap();

        let updated = repo.update_name(99, "Jon").await.unwrap();
        assert!(updated.is_none());

        let after = repo.list_all().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_remove_is_reported_once() {
        let repo = InMemoryUserRepository::seeded();

        assert!(repo.remove(2).await.unwrap());
        assert!(!repo.remove(2).await.unwrap());

        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.id != 2));
    }
}
