//! Application state - shared across all handlers.

use std::sync::Arc;

use lokal_core::ports::{PostStore, UserStore};
use lokal_core::service::{OwnerDashboardService, PublicFeedService};
use lokal_infra::memory::{MemoryPostStore, MemoryUserStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<PublicFeedService>,
    pub dashboard: Arc<OwnerDashboardService>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, users): (Arc<dyn PostStore>, Arc<dyn UserStore>) = match &config.database {
            Some(db_config) => match lokal_infra::database::connect(db_config).await {
                Ok(conn) => (
                    Arc::new(lokal_infra::PostgresPostStore::new(conn.clone())),
                    Arc::new(lokal_infra::PostgresUserStore::new(conn)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    in_memory_stores()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_stores()
            }
        };

        let feed = Arc::new(PublicFeedService::new(
            posts.clone(),
            config.public_page_size,
        ));
        let dashboard = Arc::new(OwnerDashboardService::new(
            posts,
            config.dashboard_page_size,
        ));

        tracing::info!("Application state initialized");

        Self {
            feed,
            dashboard,
            users,
        }
    }
}

fn in_memory_stores() -> (Arc<dyn PostStore>, Arc<dyn UserStore>) {
    (
        Arc::new(MemoryPostStore::new()),
        Arc::new(MemoryUserStore::new()),
    )
}
