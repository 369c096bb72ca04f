//! Public catalog endpoints: books and their reviews.

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_core::{FilterSet, PageRequest, PageResult};
use uuid::Uuid;

use crate::client::StoreClient;
use crate::dto::{BookDto, ReviewDto};
use crate::error::ApiError;
use crate::source::{page_query, ListSource};

/// Filter key: restrict to one category.
pub const CATEGORY_FILTER: &str = "categoryId";
/// Filter key: restrict to one author.
pub const AUTHOR_FILTER: &str = "authorId";
/// Filter key: free-text title/author search.
pub const SEARCH_FILTER: &str = "search";

/// Typed client for the public catalog endpoints.
#[derive(Clone)]
pub struct CatalogApi {
    client: Arc<StoreClient>,
}

impl CatalogApi {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// One page of the catalog. The endpoint returns a bare array, so
    /// "more available" comes from the full-page heuristic.
    pub async fn list_books(&self, request: &PageRequest) -> Result<Vec<BookDto>, ApiError> {
        self.client.get_json("books", &page_query(request)).await
    }

    pub async fn book_by_id(&self, book_id: Uuid) -> Result<BookDto, ApiError> {
        self.client.get_json(&format!("books/{book_id}"), &[]).await
    }

    /// The first `page_size` reviews for a book, newest first.
    pub async fn book_reviews(
        &self,
        book_id: Uuid,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<ReviewDto>, ApiError> {
        self.client
            .get_json(
                &format!("books/{book_id}/reviews"),
                &[
                    ("page".to_string(), page.to_string()),
                    ("pageSize".to_string(), page_size.to_string()),
                ],
            )
            .await
    }

    /// Quick title lookup for pickers: page 1 only, at most `limit` rows.
    pub async fn search_books(&self, term: &str, limit: u32) -> Result<Vec<BookDto>, ApiError> {
        let request = PageRequest {
            page: 1,
            page_size: limit,
            filters: FilterSet::new().with(SEARCH_FILTER, term),
        };
        self.list_books(&request).await
    }
}

/// [`ListSource`] over the catalog books endpoint.
pub struct BookListSource {
    api: CatalogApi,
}

impl BookListSource {
    pub fn new(api: CatalogApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for BookListSource {
    type Item = BookDto;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<BookDto>, ApiError> {
        let items = self.api.list_books(request).await?;
        Ok(PageResult::uncounted(items))
    }
}

/// [`ListSource`] over one book's reviews.
pub struct ReviewListSource {
    api: CatalogApi,
    book_id: Uuid,
}

impl ReviewListSource {
    pub fn new(api: CatalogApi, book_id: Uuid) -> Self {
        Self { api, book_id }
    }
}

#[async_trait]
impl ListSource for ReviewListSource {
    type Item = ReviewDto;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<ReviewDto>, ApiError> {
        let items = self
            .api
            .book_reviews(self.book_id, request.page, request.page_size)
            .await?;
        Ok(PageResult::uncounted(items))
    }
}
