//! In-memory implementation of the user store.
//!
//! Keeps records in insertion order behind an async lock. Selected when
//! no `DATABASE_URL` is configured; integration tests run against it.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::store::{StoreError, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, fields: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            bio: fields.bio,
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, fields: NewUser) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.name = fields.name;
        user.bio = fields.bio;
        Ok(Some(user.clone()))
    }

    async fn remove(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => Ok(Some(users.remove(index))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, bio: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            bio: bio.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryUserStore::new();
        let a = store.create(fields("Ann", "Engineer")).await.unwrap();
        let b = store.create(fields("Ben", "Writer")).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let store = MemoryUserStore::new();
        let created = store.create(fields("Ann", "Engineer")).await.unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = MemoryUserStore::new();
        let a = store.create(fields("Ann", "Engineer")).await.unwrap();
        let b = store.create(fields("Ben", "Writer")).await.unwrap();
        let c = store.create(fields("Cyd", "Painter")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![a, b, c]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let store = MemoryUserStore::new();
        let created = store.create(fields("Ann", "Engineer")).await.unwrap();

        let updated = store
            .update(&created.id, fields("Ann2", "Manager"))
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ann2");
        assert_eq!(updated.bio, "Manager");
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = MemoryUserStore::new();
        let result = store.update("999", fields("Ann", "Engineer")).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_remove_returns_record_then_none() {
        let store = MemoryUserStore::new();
        let created = store.create(fields("Ann", "Engineer")).await.unwrap();

        let removed = store.remove(&created.id).await.unwrap();
        assert_eq!(removed, Some(created.clone()));

        let again = store.remove(&created.id).await.unwrap();
        assert_eq!(again, None);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
