use async_trait::async_trait;
use bookstore_core::{ListItem, PageRequest, PageResult};

use crate::error::ApiError;

/// A remote endpoint that serves an ordered list one page at a time.
///
/// Implementations translate the request into endpoint-specific query
/// parameters. Callers expect stable item order across consecutive pages
/// while the underlying data does not change.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Item type this source produces.
    type Item: ListItem + Send;

    /// Fetch one page; `request.page` is 1-based.
    async fn fetch_page(&self, request: &PageRequest)
        -> Result<PageResult<Self::Item>, ApiError>;
}

/// Standard query translation: paging first, then every filter pair under
/// its own name.
pub(crate) fn page_query(request: &PageRequest) -> Vec<(String, String)> {
    let mut query = vec![
        ("page".to_string(), request.page.to_string()),
        ("pageSize".to_string(), request.page_size.to_string()),
    ];
    for (name, value) in request.filters.iter() {
        query.push((name.to_string(), value.render()));
    }
    query
}
