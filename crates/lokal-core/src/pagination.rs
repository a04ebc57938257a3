//! Page window arithmetic shared by the public feed and the owner dashboard.
//!
//! A page request turns into a bounded query window before the store is hit,
//! and into page metadata once the filtered total is known. Both halves are
//! pure and never fail: any unusable page input collapses to page 1, and a
//! page past the end simply produces an empty window.

use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// Query window derived from a requested page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Normalized page number (1-indexed).
    pub page: u64,

    /// Number of rows to skip.
    pub offset: u64,

    /// Maximum number of rows to fetch.
    pub limit: u64,
}

impl PageWindow {
    /// Build the window for a requested page.
    ///
    /// A missing or zero page normalizes to 1. Non-numeric and negative
    /// inputs arrive here as `None` (the HTTP layer parses leniently) and
    /// normalize the same way. There is no upper clamp: a page past the end
    /// yields a window beyond the data, which fetches zero rows.
    pub fn new(requested: Option<u64>, page_size: u64) -> Self {
        let size = page_size.max(1);
        let page = match requested {
            Some(p) if p >= 1 => p,
            _ => 1,
        };

        Self {
            page,
            offset: (page - 1).saturating_mul(size),
            limit: size,
        }
    }
}

/// One page of posts with paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    /// Rows within the window, newest first.
    pub items: Vec<Post>,

    /// Current page number (1-indexed).
    pub page: u64,

    /// Total count matching the filter, before windowing.
    pub total: u64,

    /// Total number of pages (0 when there are no rows).
    pub total_pages: u64,

    /// Whether a previous page exists.
    pub has_previous: bool,

    /// Whether a next page exists.
    pub has_next: bool,
}

impl PostPage {
    /// Assemble a page result with paging calculations.
    pub fn new(items: Vec<Post>, total: u64, page: u64, page_size: u64) -> Self {
        let total_pages = total.div_ceil(page_size.max(1));

        Self {
            items,
            page,
            total,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
