//! Inventory audit endpoints, staff and admin only.

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_core::{PageRequest, PageResult};

use crate::client::StoreClient;
use crate::dto::{InventoryLogDto, Paged};
use crate::error::ApiError;
use crate::source::{page_query, ListSource};

/// Filter key: restrict to one book.
pub const BOOK_FILTER: &str = "bookId";
/// Filter key: restrict to one change reason.
pub const REASON_FILTER: &str = "reason";
/// Filter key: earliest date included, ISO `YYYY-MM-DD`.
pub const START_DATE_FILTER: &str = "startDate";
/// Filter key: latest date included, ISO `YYYY-MM-DD`.
pub const END_DATE_FILTER: &str = "endDate";

/// Typed client for the inventory endpoints.
#[derive(Clone)]
pub struct InventoryApi {
    client: Arc<StoreClient>,
}

impl InventoryApi {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// One page of the stock movement trail, newest first, with the total
    /// matching count.
    pub async fn history(&self, request: &PageRequest) -> Result<Paged<InventoryLogDto>, ApiError> {
        self.client
            .get_json("inventory/history", &page_query(request))
            .await
    }
}

/// [`ListSource`] over the stock movement trail.
pub struct InventoryLogSource {
    api: InventoryApi,
}

impl InventoryLogSource {
    pub fn new(api: InventoryApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for InventoryLogSource {
    type Item = InventoryLogDto;

    async fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<PageResult<InventoryLogDto>, ApiError> {
        let page = self.api.history(request).await?;
        Ok(PageResult::counted(page.items, page.total_count))
    }
}
