use bookstore_core::{FilterSet, LoadPhase, PageApplied, PageRequest, PagedList, PagingSummary};

use crate::error::LoadError;
use crate::events::{ListEvent, ListEventSink, LoadKind};
use crate::source::ListSource;

/// Why a requested operation did not fetch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another load is in flight; the request is dropped, not queued.
    AlreadyLoading,
    /// Everything the server has is already accumulated.
    Exhausted,
}

/// Per-operation outcome of `refresh` and `load_more`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and merged.
    Applied(PageApplied),
    /// The call was a guarded no-op.
    Skipped(SkipReason),
}

/// Drives a [`PagedList`] against a remote [`ListSource`], one fetch at a
/// time.
///
/// All mutation goes through `&mut self` on the owning thread, so at most
/// one request is outstanding per loader and responses apply in order.
/// Dropping the loader on screen teardown drops any in-flight future with
/// it; a completion can never touch a screen that no longer exists.
pub struct ListLoader<S: ListSource> {
    source: S,
    list: PagedList<S::Item>,
    sink: Option<Box<dyn ListEventSink>>,
}

impl<S: ListSource> ListLoader<S> {
    /// Loader fetching `page_size` items at a time from `source`.
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            list: PagedList::new(page_size),
            sink: None,
        }
    }

    /// Route change notifications to `sink`.
    pub fn with_sink(mut self, sink: impl ListEventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Accumulated items, in arrival order.
    pub fn items(&self) -> &[S::Item] {
        self.list.items()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Server-reported total, when the endpoint provides one.
    pub fn total(&self) -> Option<u64> {
        self.list.total()
    }

    pub fn can_load_more(&self) -> bool {
        self.list.can_load_more()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn phase(&self) -> LoadPhase {
        self.list.phase()
    }

    /// Filters the next fetch will carry.
    pub fn filters(&self) -> &FilterSet {
        self.list.filters()
    }

    /// Pagination summary for display.
    pub fn summary(&self) -> PagingSummary {
        self.list.summary()
    }

    /// Replace the stored filters without fetching; the next refresh picks
    /// them up.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.list.set_filters(filters);
    }

    /// Clear the list and load page 1 under `filters`.
    ///
    /// The clear happens before the fetch, so even a failed refresh never
    /// shows rows from the previous filter set.
    pub async fn refresh(&mut self, filters: FilterSet) -> Result<LoadOutcome, LoadError> {
        let Some(request) = self.list.begin_refresh(filters) else {
            return Ok(LoadOutcome::Skipped(SkipReason::AlreadyLoading));
        };
        self.emit(ListEvent::Cleared);
        self.execute(LoadKind::Refresh, request).await
    }

    /// Fetch the page after the last merged one.
    ///
    /// A guarded no-op while another load is in flight or once the list is
    /// exhausted, so scroll handlers may call it as often as they like.
    pub async fn load_more(&mut self) -> Result<LoadOutcome, LoadError> {
        let Some(request) = self.list.begin_load_more() else {
            let reason = if self.list.is_loading() {
                SkipReason::AlreadyLoading
            } else {
                SkipReason::Exhausted
            };
            return Ok(LoadOutcome::Skipped(reason));
        };
        self.execute(LoadKind::LoadMore, request).await
    }

    async fn execute(
        &mut self,
        kind: LoadKind,
        request: PageRequest,
    ) -> Result<LoadOutcome, LoadError> {
        log::debug!(
            "fetching page {} (size {}, {} filters) for {:?}",
            request.page,
            request.page_size,
            request.filters.len(),
            kind
        );
        match self.source.fetch_page(&request).await {
            Ok(result) => {
                let applied = self.list.apply_page(result);
                log::debug!(
                    "page {} merged: +{} rows ({} shown)",
                    applied.page,
                    applied.appended,
                    applied.shown
                );
                self.emit(ListEvent::Appended {
                    start: applied.start,
                    count: applied.appended,
                    shown: applied.shown,
                    total: applied.total,
                    can_load_more: applied.can_load_more,
                });
                Ok(LoadOutcome::Applied(applied))
            }
            Err(err) => {
                self.list.apply_failure();
                let error = LoadError::from(err);
                log::warn!("page {} fetch failed: {}", request.page, error);
                self.emit(ListEvent::Failed {
                    kind,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn emit(&self, event: ListEvent) {
        if let Some(sink) = &self.sink {
            sink.emit(event);
        }
    }
}
