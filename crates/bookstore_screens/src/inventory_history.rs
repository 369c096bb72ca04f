use std::sync::Arc;

use bookstore_api::{
    inventory, BookDto, CatalogApi, InventoryApi, InventoryLogDto, InventoryLogSource,
    InventoryReason, ListEventSink, ListLoader, LoadError, LoadOutcome, StoreClient,
};
use bookstore_core::FilterSet;
use chrono::{Days, NaiveDate, Utc};
use client_logging::store_info;

use crate::search::{BookSearch, SearchOutcome};

/// Log entries fetched per page.
const PAGE_SIZE: u32 = 20;
/// The date window defaults to the last 30 days.
const DEFAULT_WINDOW_DAYS: u64 = 30;

/// View model for the stock movement audit screen.
///
/// Four independent criteria are staged here: a book picked through the
/// debounced search, a change reason, and a date window. None of them fetch
/// on their own; [`apply_filters`] snapshots the lot into one request.
///
/// [`apply_filters`]: InventoryHistoryScreen::apply_filters
pub struct InventoryHistoryScreen {
    loader: ListLoader<InventoryLogSource>,
    book_search: BookSearch,
    selected_book: Option<BookDto>,
    reason: Option<InventoryReason>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl InventoryHistoryScreen {
    pub fn new(client: Arc<StoreClient>) -> Self {
        let today = Utc::now().date_naive();
        Self {
            loader: ListLoader::new(
                InventoryLogSource::new(InventoryApi::new(client.clone())),
                PAGE_SIZE,
            ),
            book_search: BookSearch::new(CatalogApi::new(client)),
            selected_book: None,
            reason: None,
            start_date: today.checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS)),
            end_date: Some(today),
        }
    }

    /// Route list change events to `sink`.
    pub fn with_sink(mut self, sink: impl ListEventSink + 'static) -> Self {
        self.loader = self.loader.with_sink(sink);
        self
    }

    pub fn title(&self) -> &'static str {
        "Inventory History"
    }

    /// Forward one edit of the book picker's search box.
    pub fn book_search_input(&mut self, term: &str) -> bool {
        self.book_search.input_changed(term)
    }

    /// Completed book lookups, drained by the screen's event loop.
    pub fn poll_book_search(&mut self) -> Option<SearchOutcome> {
        self.book_search.poll()
    }

    /// Pin the history to one book picked from the candidates.
    pub fn select_book(&mut self, book: BookDto) {
        self.book_search.cancel();
        store_info!("inventory history pinned to book {}", book.id);
        self.selected_book = Some(book);
    }

    pub fn clear_book(&mut self) {
        self.selected_book = None;
    }

    pub fn selected_book(&self) -> Option<&BookDto> {
        self.selected_book.as_ref()
    }

    /// Caption for the picker button.
    pub fn selected_book_label(&self) -> String {
        match &self.selected_book {
            Some(book) => format!("Book: {}", book.title),
            None => "Book: All".to_string(),
        }
    }

    pub fn reason(&self) -> Option<InventoryReason> {
        self.reason
    }

    pub fn set_reason(&mut self, reason: Option<InventoryReason>) {
        self.reason = reason;
    }

    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start_date, self.end_date)
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
    }

    /// Put every criterion back to its default. Staged like any other edit;
    /// the caller decides when to reload.
    pub fn clear_filters(&mut self) {
        let today = Utc::now().date_naive();
        self.selected_book = None;
        self.reason = None;
        self.start_date = today.checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS));
        self.end_date = Some(today);
    }

    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(book) = &self.selected_book {
            filters.insert(inventory::BOOK_FILTER, book.id);
        }
        if let Some(reason) = self.reason {
            filters.insert(inventory::REASON_FILTER, reason.as_str());
        }
        if let Some(start) = self.start_date {
            filters.insert(inventory::START_DATE_FILTER, start);
        }
        if let Some(end) = self.end_date {
            filters.insert(inventory::END_DATE_FILTER, end);
        }
        filters
    }

    /// Reload page 1 under the staged criteria.
    pub async fn apply_filters(&mut self) -> Result<LoadOutcome, LoadError> {
        self.loader.refresh(self.filters()).await
    }

    pub async fn refresh(&mut self) -> Result<LoadOutcome, LoadError> {
        self.apply_filters().await
    }

    /// Fetch the next page; safe to call from scroll handlers.
    pub async fn load_more(&mut self) -> Result<LoadOutcome, LoadError> {
        self.loader.load_more().await
    }

    pub fn entries(&self) -> &[InventoryLogDto] {
        self.loader.items()
    }

    pub fn can_load_more(&self) -> bool {
        self.loader.can_load_more()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn paging_info(&self) -> String {
        self.loader.summary().to_string()
    }
}
