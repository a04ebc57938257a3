use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::pagination::{PageWindow, PostPage};
use crate::ports::{Caller, IdentityProvider, PostStore};

/// Owner dashboard: the caller's own posts plus create/update/delete.
///
/// Every operation resolves the caller first and refuses anonymous callers
/// before any storage access. Mutations are scoped to the caller's rows by
/// the store itself; a row owned by someone else reads as missing.
pub struct OwnerDashboardService {
    store: Arc<dyn PostStore>,
    page_size: u64,
}

impl OwnerDashboardService {
    /// `page_size` is deployment configuration, not caller input.
    pub fn new(store: Arc<dyn PostStore>, page_size: u64) -> Self {
        Self { store, page_size }
    }

    fn authenticated(identity: &dyn IdentityProvider) -> Result<Uuid, DomainError> {
        match identity.resolve_caller() {
            Caller::User(id) => Ok(id),
            Caller::Anonymous => Err(DomainError::Unauthenticated),
        }
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_owned()));
        }
        Ok(())
    }

    /// One page of the caller's own posts, newest first.
    pub async fn my_posts(
        &self,
        identity: &dyn IdentityProvider,
        page: Option<u64>,
    ) -> Result<PostPage, DomainError> {
        let owner = Self::authenticated(identity)?;
        let window = PageWindow::new(page, self.page_size);
        let (items, total) = self
            .store
            .list(Some(owner), window.offset, window.limit)
            .await?;

        Ok(PostPage::new(items, total, window.page, self.page_size))
    }

    /// Create a post owned by the caller.
    pub async fn create(
        &self,
        identity: &dyn IdentityProvider,
        title: String,
        content: String,
    ) -> Result<Post, DomainError> {
        let owner = Self::authenticated(identity)?;
        Self::validate_title(&title)?;

        let post = Post::new(owner, title, content);
        Ok(self.store.insert(post).await?)
    }

    /// Update title and content of one of the caller's posts.
    pub async fn update(
        &self,
        identity: &dyn IdentityProvider,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<Post, DomainError> {
        let owner = Self::authenticated(identity)?;
        Self::validate_title(&title)?;

        self.store
            .update_owned(id, owner, &title, &content)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Hard-delete one of the caller's posts.
    pub async fn delete(
        &self,
        identity: &dyn IdentityProvider,
        id: Uuid,
    ) -> Result<(), DomainError> {
        let owner = Self::authenticated(identity)?;

        if self.store.delete_owned(id, owner).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};

    use super::*;
    use crate::service::testing::{StaticIdentity, VecPostStore, post_at};

    fn dashboard(store: Arc<VecPostStore>) -> OwnerDashboardService {
        OwnerDashboardService::new(store, 5)
    }

    fn user(id: Uuid) -> StaticIdentity {
        StaticIdentity(Caller::User(id))
    }

    #[tokio::test]
    async fn my_posts_only_shows_the_callers_rows() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let now = Utc::now();
        let store = Arc::new(VecPostStore::with_posts(vec![
            post_at(a, "a one", now),
            post_at(b, "b one", now + TimeDelta::seconds(1)),
            post_at(a, "a two", now + TimeDelta::seconds(2)),
        ]));

        let page = dashboard(store).my_posts(&user(a), None).await.unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.user_id == a));
        assert_eq!(page.items[0].title, "a two");
    }

    #[tokio::test]
    async fn anonymous_callers_are_rejected_before_storage() {
        let store = Arc::new(VecPostStore::default());
        let service = dashboard(store.clone());
        let anonymous = StaticIdentity(Caller::Anonymous);

        let listed = service.my_posts(&anonymous, None).await;
        assert!(matches!(listed, Err(DomainError::Unauthenticated)));

        let created = service
            .create(&anonymous, "title".into(), "content".into())
            .await;
        assert!(matches!(created, Err(DomainError::Unauthenticated)));
        assert_eq!(store.row_count(), 0);

        let deleted = service.delete(&anonymous, Uuid::new_v4()).await;
        assert!(matches!(deleted, Err(DomainError::Unauthenticated)));
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips_the_blob() {
        let owner = Uuid::new_v4();
        let store = Arc::new(VecPostStore::default());
        let service = dashboard(store.clone());

        let content = "<h1>hello</h1><p>&nbsp;</p>".to_owned();
        let created = service
            .create(&user(owner), "hello".into(), content.clone())
            .await
            .unwrap();

        let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "hello");
        assert_eq!(fetched.content, content);
        assert_eq!(fetched.user_id, owner);
    }

    #[tokio::test]
    async fn empty_title_is_rejected_and_nothing_is_written() {
        let owner = Uuid::new_v4();
        let store = Arc::new(VecPostStore::default());
        let service = dashboard(store.clone());

        let result = service.create(&user(owner), "   ".into(), "body".into()).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn non_owner_mutations_read_as_not_found() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let post = post_at(a, "owned by a", Utc::now());
        let post_id = post.id;
        let store = Arc::new(VecPostStore::with_posts(vec![post]));
        let service = dashboard(store.clone());

        let updated = service
            .update(&user(b), post_id, "hijack".into(), "x".into())
            .await;
        assert!(matches!(updated, Err(DomainError::NotFound)));

        let deleted = service.delete(&user(b), post_id).await;
        assert!(matches!(deleted, Err(DomainError::NotFound)));

        // The row is untouched and still editable by its owner.
        let updated = service
            .update(&user(a), post_id, "new title".into(), "new body".into())
            .await
            .unwrap();
        assert_eq!(updated.title, "new title");

        let fetched = store.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "new title");
        assert_eq!(fetched.content, "new body");
    }

    #[tokio::test]
    async fn missing_id_and_foreign_id_are_indistinguishable() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let foreign = post_at(a, "foreign", Utc::now());
        let foreign_id = foreign.id;
        let store = Arc::new(VecPostStore::with_posts(vec![foreign]));
        let service = dashboard(store);

        let on_foreign = service.delete(&user(b), foreign_id).await;
        let on_missing = service.delete(&user(b), Uuid::new_v4()).await;
        assert!(matches!(on_foreign, Err(DomainError::NotFound)));
        assert!(matches!(on_missing, Err(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn update_keeps_id_owner_and_timestamp_frozen() {
        let owner = Uuid::new_v4();
        let post = post_at(owner, "before", Utc::now());
        let (id, created_at) = (post.id, post.created_at);
        let store = Arc::new(VecPostStore::with_posts(vec![post]));
        let service = dashboard(store);

        let updated = service
            .update(&user(owner), id, "after".into(), "body".into())
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.user_id, owner);
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn dashboard_pagination_uses_the_configured_size() {
        let owner = Uuid::new_v4();
        let start = Utc::now();
        let posts = (0..7)
            .map(|i| post_at(owner, &format!("p{i}"), start + TimeDelta::seconds(i)))
            .collect();
        let service = dashboard(Arc::new(VecPostStore::with_posts(posts)));

        let first = service.my_posts(&user(owner), Some(1)).await.unwrap();
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next);

        let second = service.my_posts(&user(owner), Some(2)).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(!second.has_next);
        assert!(second.has_previous);
    }
}
