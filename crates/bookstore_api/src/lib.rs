//! Bookstore API layer: HTTP clients, paged list sources and the async
//! loader that drives the pure list state from `bookstore_core`.
pub mod catalog;
pub mod inventory;
pub mod reports;
pub mod shopping;
pub mod users;

mod client;
mod debounce;
mod dto;
mod error;
mod events;
mod loader;
mod settings;
mod source;

pub use catalog::{BookListSource, CatalogApi, ReviewListSource};
pub use client::StoreClient;
pub use debounce::Debouncer;
pub use dto::{
    AddCartItemDto, BestsellerDto, BookDto, CategoryDto, DailyRevenueDto, InventoryLogDto,
    InventoryReason, LowStockBookDto, Paged, RevenueReportDto, ReviewDto, UpdateUserStatusDto,
    UserDto, WishlistItemDto,
};
pub use error::{ApiError, LoadError, LoadErrorKind};
pub use events::{ChannelEventSink, ListEvent, ListEventSink, LoadKind};
pub use inventory::{InventoryApi, InventoryLogSource};
pub use loader::{ListLoader, LoadOutcome, SkipReason};
pub use reports::ReportsApi;
pub use settings::{ApiSettings, Platform, SettingsError};
pub use shopping::ShoppingApi;
pub use source::ListSource;
pub use users::{AdminUserApi, UserListSource};
