use crate::filters::FilterSet;

/// Parameters for fetching one page of a remote list.
///
/// Built fresh for every fetch from the list's current position and filters;
/// never reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Page to fetch, 1-based.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Criteria the server applies before paginating.
    pub filters: FilterSet,
}

/// One fetched page plus whatever pagination metadata the endpoint provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    /// Items of this page, in server order.
    pub items: Vec<T>,
    /// Total matching items across all pages, when the endpoint reports one.
    pub total: Option<u64>,
}

impl<T> PageResult<T> {
    /// Page from an endpoint that reports the total matching count.
    pub fn counted(items: Vec<T>, total: u64) -> Self {
        Self {
            items,
            total: Some(total),
        }
    }

    /// Page from an endpoint that returns a bare array. Whether more pages
    /// exist falls back to the full-page heuristic.
    pub fn uncounted(items: Vec<T>) -> Self {
        Self { items, total: None }
    }
}
