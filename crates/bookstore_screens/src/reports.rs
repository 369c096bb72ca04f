use std::sync::Arc;

use bookstore_api::{
    BestsellerDto, LoadError, LowStockBookDto, ReportsApi, RevenueReportDto, StoreClient,
};
use chrono::{Days, NaiveDate, Utc};
use client_logging::store_info;

/// The default window spans a week ending today.
const DEFAULT_WINDOW_DAYS: u64 = 6;
/// Bestseller rows requested per load.
const BESTSELLER_TOP: u32 = 7;
/// Stock at or below this counts as low.
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Outcome of one combined reports load, one result per report.
#[derive(Debug)]
pub struct ReportsLoad {
    pub revenue: Result<(), LoadError>,
    pub bestsellers: Result<(), LoadError>,
    pub low_stock: Result<(), LoadError>,
}

impl ReportsLoad {
    pub fn all_ok(&self) -> bool {
        self.revenue.is_ok() && self.bestsellers.is_ok() && self.low_stock.is_ok()
    }
}

/// View model for the admin reports screen.
///
/// The three reports load independently and each call returns its own
/// result, so one failing endpoint leaves the other two rendered.
pub struct ReportsScreen {
    api: ReportsApi,
    start: NaiveDate,
    end: NaiveDate,
    low_stock_threshold: u32,
    revenue: Option<RevenueReportDto>,
    bestsellers: Vec<BestsellerDto>,
    low_stock: Vec<LowStockBookDto>,
}

impl ReportsScreen {
    pub fn new(client: Arc<StoreClient>) -> Self {
        let end = Utc::now().date_naive();
        let start = end.checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS)).unwrap_or(end);
        Self {
            api: ReportsApi::new(client),
            start,
            end,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            revenue: None,
            bestsellers: Vec::new(),
            low_stock: Vec::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        "Reports"
    }

    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Stage a new reporting window; the next load uses it.
    pub fn set_window(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start = start;
        self.end = end;
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn set_low_stock_threshold(&mut self, threshold: u32) {
        self.low_stock_threshold = threshold;
    }

    pub async fn load_revenue(&mut self) -> Result<(), LoadError> {
        self.revenue = Some(self.api.revenue(self.start, self.end).await?);
        Ok(())
    }

    pub async fn load_bestsellers(&mut self) -> Result<(), LoadError> {
        self.bestsellers = self
            .api
            .bestsellers(self.start, self.end, BESTSELLER_TOP)
            .await?;
        Ok(())
    }

    pub async fn load_low_stock(&mut self) -> Result<(), LoadError> {
        self.low_stock = self.api.low_stock(self.low_stock_threshold).await?;
        Ok(())
    }

    /// Load all three reports, reporting success per report.
    pub async fn load_all(&mut self) -> ReportsLoad {
        store_info!(
            "loading reports for {}..={} (threshold {})",
            self.start,
            self.end,
            self.low_stock_threshold
        );
        ReportsLoad {
            revenue: self.load_revenue().await,
            bestsellers: self.load_bestsellers().await,
            low_stock: self.load_low_stock().await,
        }
    }

    pub fn revenue(&self) -> Option<&RevenueReportDto> {
        self.revenue.as_ref()
    }

    pub fn bestsellers(&self) -> &[BestsellerDto] {
        &self.bestsellers
    }

    pub fn low_stock(&self) -> &[LowStockBookDto] {
        &self.low_stock
    }
}
