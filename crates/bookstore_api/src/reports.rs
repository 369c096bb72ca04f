//! Admin reporting endpoints. These return whole documents rather than
//! pages, so there is no [`crate::ListSource`] here.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::client::StoreClient;
use crate::dto::{BestsellerDto, LowStockBookDto, RevenueReportDto};
use crate::error::ApiError;

/// Typed client for the admin reporting endpoints.
#[derive(Clone)]
pub struct ReportsApi {
    client: Arc<StoreClient>,
}

impl ReportsApi {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// Revenue between `start` and `end`, both inclusive.
    pub async fn revenue(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RevenueReportDto, ApiError> {
        self.client
            .get_json("admin/reports/revenue", &date_window(start, end))
            .await
    }

    /// The `top` best selling books between `start` and `end`.
    pub async fn bestsellers(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        top: u32,
    ) -> Result<Vec<BestsellerDto>, ApiError> {
        let mut query = date_window(start, end);
        query.push(("top".to_string(), top.to_string()));
        self.client
            .get_json("admin/reports/bestsellers", &query)
            .await
    }

    /// Books whose stock is at or below `threshold`.
    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<LowStockBookDto>, ApiError> {
        self.client
            .get_json(
                "admin/reports/low-stock",
                &[("threshold".to_string(), threshold.to_string())],
            )
            .await
    }
}

fn date_window(start: NaiveDate, end: NaiveDate) -> Vec<(String, String)> {
    vec![
        (
            "startDate".to_string(),
            start.format("%Y-%m-%d").to_string(),
        ),
        ("endDate".to_string(), end.format("%Y-%m-%d").to_string()),
    ]
}
