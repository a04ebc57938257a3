use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::pagination::{PageWindow, PostPage};
use crate::ports::PostStore;

/// Public feed over all posts, newest first, no authentication required.
pub struct PublicFeedService {
    store: Arc<dyn PostStore>,
    page_size: u64,
}

impl PublicFeedService {
    /// `page_size` is deployment configuration, not caller input.
    pub fn new(store: Arc<dyn PostStore>, page_size: u64) -> Self {
        Self { store, page_size }
    }

    /// One page of the feed. Content blobs pass through verbatim.
    pub async fn feed(&self, page: Option<u64>) -> Result<PostPage, DomainError> {
        let window = PageWindow::new(page, self.page_size);
        let (items, total) = self
            .store
            .list(None, window.offset, window.limit)
            .await?;

        Ok(PostPage::new(items, total, window.page, self.page_size))
    }

    /// Single post lookup for detail views.
    pub async fn post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::service::testing::{VecPostStore, post_at};

    fn seeded_feed(count: usize, page_size: u64) -> PublicFeedService {
        let owner = Uuid::new_v4();
        let start = Utc::now();
        let posts = (0..count)
            .map(|i| post_at(owner, &format!("post {i}"), start + TimeDelta::seconds(i as i64)))
            .collect();

        PublicFeedService::new(Arc::new(VecPostStore::with_posts(posts)), page_size)
    }

    #[tokio::test]
    async fn first_page_is_full_and_newest_first() {
        let feed = seeded_feed(13, 6);

        let page = feed.feed(Some(1)).await.unwrap();
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].title, "post 12");
        assert_eq!(page.total, 13);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_previous);
        assert!(page.has_next);
    }

    #[tokio::test]
    async fn last_page_holds_the_remainder() {
        let feed = seeded_feed(13, 6);

        let page = feed.feed(Some(3)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "post 0");
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_not_an_error() {
        let feed = seeded_feed(13, 6);

        let page = feed.feed(Some(4)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn missing_page_defaults_to_first() {
        let feed = seeded_feed(3, 6);

        let page = feed.feed(None).await.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[tokio::test]
    async fn feed_spans_all_owners() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let now = Utc::now();
        let store = VecPostStore::with_posts(vec![
            post_at(a, "from a", now),
            post_at(b, "from b", now + TimeDelta::seconds(1)),
        ]);
        let feed = PublicFeedService::new(Arc::new(store), 6);

        let page = feed.feed(None).await.unwrap();
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn content_passes_through_untouched() {
        let owner = Uuid::new_v4();
        let mut post = post_at(owner, "markup", Utc::now());
        post.content = "  <p>raw &amp; <em>unsanitized</em></p>\n".to_owned();
        let expected = post.content.clone();
        let feed = PublicFeedService::new(Arc::new(VecPostStore::with_posts(vec![post])), 6);

        let page = feed.feed(None).await.unwrap();
        assert_eq!(page.items[0].content, expected);
    }

    #[tokio::test]
    async fn unknown_post_is_not_found() {
        let feed = seeded_feed(1, 6);

        let result = feed.post(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound)));
    }
}
