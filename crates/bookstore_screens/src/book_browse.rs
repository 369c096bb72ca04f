use std::sync::Arc;

use bookstore_api::{
    catalog, BookDto, BookListSource, CatalogApi, ListEventSink, ListLoader, LoadError,
    LoadOutcome, StoreClient,
};
use bookstore_core::FilterSet;
use uuid::Uuid;

/// Books fetched per page while browsing.
const PAGE_SIZE: u32 = 12;

/// View model for the catalog browsing screen.
///
/// The books endpoint returns a bare array without a total, so "more
/// available" rests on whether the last page arrived full. A dataset whose
/// size is an exact multiple of the page size costs one extra empty fetch
/// before the list reads as exhausted.
pub struct BookBrowseScreen {
    loader: ListLoader<BookListSource>,
    category: Option<Uuid>,
    author: Option<Uuid>,
    search: Option<String>,
}

impl BookBrowseScreen {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self {
            loader: ListLoader::new(BookListSource::new(CatalogApi::new(client)), PAGE_SIZE),
            category: None,
            author: None,
            search: None,
        }
    }

    /// Route list change events to `sink`.
    pub fn with_sink(mut self, sink: impl ListEventSink + 'static) -> Self {
        self.loader = self.loader.with_sink(sink);
        self
    }

    pub fn title(&self) -> &'static str {
        "Browse Books"
    }

    pub fn set_category(&mut self, category: Option<Uuid>) {
        self.category = category;
    }

    pub fn set_author(&mut self, author: Option<Uuid>) {
        self.author = author;
    }

    /// Stage the search box content; blank input clears the criterion.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
    }

    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(category) = self.category {
            filters.insert(catalog::CATEGORY_FILTER, category);
        }
        if let Some(author) = self.author {
            filters.insert(catalog::AUTHOR_FILTER, author);
        }
        if let Some(search) = &self.search {
            filters.insert(catalog::SEARCH_FILTER, search.as_str());
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

    pub fn books(&self) -> &[BookDto] {
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
