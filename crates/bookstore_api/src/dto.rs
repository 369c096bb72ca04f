use bookstore_core::ListItem;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope used by endpoints that report the total matching count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// A storefront user account, as the admin endpoints return it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: String,
    pub is_active: bool,
}

impl UserDto {
    /// Real name when one is on file, account name otherwise.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            self.user_name.clone()
        } else {
            full.to_string()
        }
    }
}

impl ListItem for UserDto {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
}

/// A catalog book.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    pub price: Decimal,
    pub stock_quantity: i32,
    #[serde(default)]
    pub average_rating: Option<f32>,
}

impl ListItem for BookDto {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Why a stock level changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryReason {
    Purchase,
    Sale,
    Adjustment,
    Return,
    Damage,
}

impl InventoryReason {
    /// Every reason, in the order filter pickers list them.
    pub const ALL: [InventoryReason; 5] = [
        InventoryReason::Purchase,
        InventoryReason::Sale,
        InventoryReason::Adjustment,
        InventoryReason::Return,
        InventoryReason::Damage,
    ];

    /// Wire-level spelling, identical to the display one.
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryReason::Purchase => "Purchase",
            InventoryReason::Sale => "Sale",
            InventoryReason::Adjustment => "Adjustment",
            InventoryReason::Return => "Return",
            InventoryReason::Damage => "Damage",
        }
    }
}

/// One entry of the stock movement audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLogDto {
    pub id: i64,
    pub book_id: Uuid,
    pub book_title: String,
    /// Signed change; sales come through negative.
    pub change_quantity: i32,
    pub reason: InventoryReason,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl ListItem for InventoryLogDto {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// A customer review attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ListItem for ReviewDto {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemDto {
    pub book_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

/// Body for adding a book to the cart or bumping its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemDto {
    pub book_id: Uuid,
    pub quantity: u32,
}

/// Body for activating or deactivating an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusDto {
    pub is_active: bool,
}

/// Revenue over a reporting window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReportDto {
    pub total_revenue: Decimal,
    #[serde(default)]
    pub order_count: u32,
    #[serde(default)]
    pub daily_revenue: Vec<DailyRevenueDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenueDto {
    pub date: NaiveDate,
    pub total_revenue: Decimal,
    #[serde(default)]
    pub order_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestsellerDto {
    pub book_id: Uuid,
    pub book_title: String,
    pub total_quantity_sold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockBookDto {
    pub id: Uuid,
    pub title: String,
    pub stock_quantity: i32,
}
