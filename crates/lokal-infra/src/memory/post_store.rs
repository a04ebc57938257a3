//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lokal_core::domain::Post;
use lokal_core::error::RepoError;
use lokal_core::ports::PostStore;

/// Post store backed by a Vec behind an async RwLock.
///
/// Honors the same contract as the PostgreSQL store: ordering by
/// `created_at` descending with `id` descending as tie-break, owner
/// filtering evaluated inside the store, and a filtered total computed
/// against the same snapshot as the returned window.
pub struct MemoryPostStore {
    rows: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(
        &self,
        owner: Option<Uuid>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Post>, u64), RepoError> {
        let rows = self.rows.read().await;

        let mut matching: Vec<Post> = rows
            .iter()
            .filter(|p| owner.is_none_or(|o| p.user_id == o))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        rows.push(new_post.clone());
        Ok(new_post)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, RepoError> {
        let mut rows = self.rows.write().await;

        match rows.iter_mut().find(|p| p.id == id && p.user_id == owner) {
            Some(found) => {
                found.title = title.to_owned();
                found.content = content.to_owned();
                Ok(Some(found.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| !(p.id == id && p.user_id == owner));

        Ok(rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};

    use super::*;

    fn post(owner: Uuid, title: &str) -> Post {
        Post::new(owner, title.to_owned(), format!("<p>{title}</p>"))
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryPostStore::new();
        let owner = Uuid::new_v4();
        let start = Utc::now();

        for i in 0..3 {
            let mut p = post(owner, &format!("p{i}"));
            p.created_at = start + TimeDelta::seconds(i);
            store.insert(p).await.unwrap();
        }

        let (rows, total) = store.list(None, 0, 10).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows[0].title, "p2");
        assert_eq!(rows[2].title, "p0");
    }

    #[tokio::test]
    async fn equal_timestamps_break_ties_by_id() {
        let store = MemoryPostStore::new();
        let owner = Uuid::new_v4();
        let at = Utc::now();

        for i in 0..4 {
            let mut p = post(owner, &format!("tied {i}"));
            p.created_at = at;
            store.insert(p).await.unwrap();
        }

        // Two half-windows must partition the set with no overlap or gap.
        let (first, _) = store.list(None, 0, 2).await.unwrap();
        let (second, _) = store.list(None, 2, 2).await.unwrap();

        let mut seen: Vec<Uuid> = first.iter().chain(second.iter()).map(|p| p.id).collect();
        assert_eq!(seen.len(), 4);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert!(first[0].id > first[1].id);
    }

    #[tokio::test]
    async fn owner_filter_limits_rows_and_total() {
        let store = MemoryPostStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.insert(post(a, "a1")).await.unwrap();
        store.insert(post(b, "b1")).await.unwrap();
        store.insert(post(a, "a2")).await.unwrap();

        let (rows, total) = store.list(Some(a), 0, 10).await.unwrap();
        assert_eq!(total, 2);
        assert!(rows.iter().all(|p| p.user_id == a));
    }

    #[tokio::test]
    async fn total_ignores_the_window() {
        let store = MemoryPostStore::new();
        let owner = Uuid::new_v4();

        for i in 0..5 {
            store.insert(post(owner, &format!("p{i}"))).await.unwrap();
        }

        let (rows, total) = store.list(None, 0, 2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn scoped_mutations_miss_foreign_rows() {
        let store = MemoryPostStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let created = store.insert(post(a, "mine")).await.unwrap();

        let updated = store
            .update_owned(created.id, b, "stolen", "body")
            .await
            .unwrap();
        assert!(updated.is_none());

        assert!(!store.delete_owned(created.id, b).await.unwrap());
        assert!(store.delete_owned(created.id, a).await.unwrap());
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
    }
}
