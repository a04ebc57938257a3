use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published piece of content.
///
/// `content` is rich-text markup produced by the editor; the backend stores
/// and returns it byte-for-byte without parsing it. `created_at` is the sole
/// sort key of every listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`.
    ///
    /// `id` and `created_at` are assigned here and never change afterwards.
    pub fn new(user_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}
