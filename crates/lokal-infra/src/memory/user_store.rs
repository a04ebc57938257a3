//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lokal_core::domain::User;
use lokal_core::error::RepoError;
use lokal_core::ports::UserStore;

/// User store backed by a Vec behind an async RwLock.
///
/// Enforces the same unique-email rule as the `users` table.
pub struct MemoryUserStore {
    rows: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, new_user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(RepoError::Constraint("Email already registered".to_string()));
        }

        rows.push(new_user.clone());
        Ok(new_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_find_round_trip() {
        let store = MemoryUserStore::new();
        let user = User::new("owner@example.com".into(), "hash".into());
        let id = user.id;

        store.insert(user).await.unwrap();

        let by_id = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "owner@example.com");

        let by_email = store.find_by_email("owner@example.com").await.unwrap();
        assert!(by_email.is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let store = MemoryUserStore::new();
        store
            .insert(User::new("owner@example.com".into(), "hash".into()))
            .await
            .unwrap();

        let result = store
            .insert(User::new("owner@example.com".into(), "other".into()))
            .await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }
}
