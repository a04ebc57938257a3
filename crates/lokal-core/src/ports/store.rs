use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Post storage.
///
/// Reads take an optional owner filter; mutations take a mandatory owner and
/// evaluate it as part of the query, so a mismatch is indistinguishable from
/// a missing row. The store is the single source of truth for ordering:
/// `created_at` descending, ties broken by `id` descending.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch one window of posts plus the total count matching the filter.
    ///
    /// The count ignores the window. It must be consistent with the fetched
    /// rows: a single call never returns a page with duplicated or missing
    /// rows, even under concurrent writes.
    async fn list(
        &self,
        owner: Option<Uuid>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Post>, u64), RepoError>;

    /// Find a post by its unique ID, regardless of owner.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post. `id` and `created_at` are already assigned.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Update title and content of a post owned by `owner`.
    ///
    /// Returns `None` when no post has that id or the post belongs to a
    /// different owner. `id`, `user_id`, and `created_at` never change.
    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, RepoError>;

    /// Hard-delete a post owned by `owner`. Returns whether a row was
    /// removed; `false` covers both missing id and ownership mismatch.
    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, RepoError>;
}

/// User account storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Persist a new user.
    async fn insert(&self, user: User) -> Result<User, RepoError>;
}
