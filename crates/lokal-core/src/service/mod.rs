//! Service façades composing the stores with the pagination calculator.

mod dashboard;
mod feed;

pub use dashboard::OwnerDashboardService;
pub use feed::PublicFeedService;
