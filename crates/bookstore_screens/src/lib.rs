//! Bookstore screens: the view-model layer a frontend binds to.
//!
//! Each screen owns its loader and staged filter state; rendering and input
//! wiring live with the embedding shell, which observes changes through the
//! loaders' event sinks.
mod book_browse;
mod book_detail;
mod inventory_history;
mod registry;
mod reports;
mod search;
mod user_directory;

pub use book_browse::BookBrowseScreen;
pub use book_detail::BookDetailScreen;
pub use inventory_history::InventoryHistoryScreen;
pub use registry::{find, ScreenEntry, ScreenKind, SCREENS};
pub use reports::{ReportsLoad, ReportsScreen};
pub use search::{BookSearch, SearchOutcome};
pub use user_directory::{RoleFilter, StatusFilter, UserDirectoryScreen};
