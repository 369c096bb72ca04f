use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::filters::FilterSet;
use crate::page::{PageRequest, PageResult};

/// An item that can appear in a paginated list. Identity drives duplicate
/// suppression when pages overlap.
pub trait ListItem {
    /// Primary-key type of the item.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// The item's identity.
    fn id(&self) -> Self::Id;
}

/// What a list is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing in flight; refresh and load-more are both accepted.
    #[default]
    Idle,
    /// A clear-and-reload of page 1 is in flight.
    Refreshing,
    /// An append of the next page is in flight.
    LoadingMore,
}

/// Outcome of merging one fetched page, returned per operation instead of
/// being stored as ambient screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageApplied {
    /// Index of the first newly appended item.
    pub start: usize,
    /// Items appended after duplicate suppression.
    pub appended: usize,
    /// Items skipped because their id was already present.
    pub duplicates: usize,
    /// Page number that was merged, 1-based.
    pub page: u32,
    /// Accumulated item count after the merge.
    pub shown: usize,
    /// Server-reported total, when known.
    pub total: Option<u64>,
    /// Whether another page is worth fetching.
    pub can_load_more: bool,
}

/// Client-side accumulated list built by appending successive remote pages.
///
/// This is the pure state machine: it hands out [`PageRequest`]s and merges
/// [`PageResult`]s, while the caller performs the actual IO between the two.
/// Item identity is tracked so overlapping pages never produce duplicate
/// rows, and the page counter only advances on success so a failed fetch
/// retries the same page.
#[derive(Debug)]
pub struct PagedList<T: ListItem> {
    items: Vec<T>,
    seen: HashSet<T::Id>,
    filters: FilterSet,
    page_size: u32,
    /// Next page to fetch, 1-based.
    next_page: u32,
    total: Option<u64>,
    can_load_more: bool,
    phase: LoadPhase,
}

impl<T: ListItem> PagedList<T> {
    /// An empty list fetching `page_size` items at a time.
    ///
    /// Panics when `page_size` is zero.
    pub fn new(page_size: u32) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            filters: FilterSet::new(),
            page_size,
            next_page: 1,
            total: None,
            can_load_more: true,
            phase: LoadPhase::Idle,
        }
    }

    /// Accumulated items, in arrival order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Server-reported total, when the endpoint provides one.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Configured page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether another page is worth fetching.
    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Idle
    }

    /// Filters the next fetch will carry.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Replace the stored filters without fetching.
    ///
    /// The caller is expected to follow up with [`begin_refresh`]; batching
    /// several criterion edits this way costs a single network call.
    ///
    /// [`begin_refresh`]: PagedList::begin_refresh
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    /// Start over with the given filters.
    ///
    /// Accumulated items are cleared now, not when the response arrives, so
    /// a failed refresh leaves an empty list rather than rows from before
    /// the refresh was requested. Returns the page-1 request to execute, or
    /// `None` while another load is in flight (concurrent requests are
    /// dropped, not queued).
    pub fn begin_refresh(&mut self, filters: FilterSet) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }
        self.items.clear();
        self.seen.clear();
        self.filters = filters;
        self.next_page = 1;
        self.total = None;
        self.can_load_more = true;
        self.phase = LoadPhase::Refreshing;
        Some(self.request())
    }

    /// Ask for the next page under the stored filters.
    ///
    /// Returns `None` while a load is in flight or once the list is
    /// exhausted; calling it then is a harmless no-op, never an error.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.can_load_more {
            return None;
        }
        self.phase = LoadPhase::LoadingMore;
        Some(self.request())
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            page: self.next_page,
            page_size: self.page_size,
            filters: self.filters.clone(),
        }
    }

    /// Merge one successfully fetched page and return to idle.
    ///
    /// Items whose id is already accumulated are skipped. A known total is
    /// trusted for "more available"; endpoints without one fall back to
    /// whether the page arrived full. An empty page always stops further
    /// loading, even when a stale total claims otherwise.
    pub fn apply_page(&mut self, result: PageResult<T>) -> PageApplied {
        let start = self.items.len();
        let fetched = result.items.len();
        let mut duplicates = 0;
        for item in result.items {
            if self.seen.insert(item.id()) {
                self.items.push(item);
            } else {
                duplicates += 1;
            }
        }
        if result.total.is_some() {
            self.total = result.total;
        }
        self.can_load_more = if fetched == 0 {
            false
        } else {
            match self.total {
                Some(total) => (self.items.len() as u64) < total,
                None => fetched as u32 == self.page_size,
            }
        };
        let applied = PageApplied {
            start,
            appended: self.items.len() - start,
            duplicates,
            page: self.next_page,
            shown: self.items.len(),
            total: self.total,
            can_load_more: self.can_load_more,
        };
        self.next_page += 1;
        self.phase = LoadPhase::Idle;
        applied
    }

    /// Record a failed fetch and return to idle.
    ///
    /// Accumulated items and the page counter stay untouched, so a retry
    /// re-requests the page that failed. `can_load_more` keeps its value to
    /// leave manual retry available.
    pub fn apply_failure(&mut self) {
        self.phase = LoadPhase::Idle;
    }

    /// Pagination summary for display.
    pub fn summary(&self) -> PagingSummary {
        PagingSummary {
            shown: self.items.len(),
            total: self.total,
            // next_page counts one past the last merged page.
            page: self.next_page.saturating_sub(1),
            page_count: self.total.map(|total| {
                (total.div_ceil(u64::from(self.page_size))) as u32
            }),
        }
    }
}

/// Human-readable position within a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingSummary {
    /// Accumulated item count.
    pub shown: usize,
    /// Server-reported total, when known.
    pub total: Option<u64>,
    /// Last fully merged page, 0 before the first page lands.
    pub page: u32,
    /// Total page count, when a total is known.
    pub page_count: Option<u32>,
}

impl fmt::Display for PagingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shown == 0 {
            return write!(f, "No entries found.");
        }
        match (self.total, self.page_count) {
            (Some(total), Some(pages)) => write!(
                f,
                "Showing {} of {} entries. Page {} of {}",
                self.shown, total, self.page, pages
            ),
            _ => write!(f, "Showing {} entries. Page {}", self.shown, self.page),
        }
    }
}
