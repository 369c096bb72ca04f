use std::sync::Arc;

use bookstore_api::StoreClient;

use crate::book_browse::BookBrowseScreen;
use crate::book_detail::BookDetailScreen;
use crate::inventory_history::InventoryHistoryScreen;
use crate::reports::ReportsScreen;
use crate::user_directory::UserDirectoryScreen;

/// A constructed screen, one variant per navigable screen type.
pub enum ScreenKind {
    BookBrowse(BookBrowseScreen),
    BookDetail(BookDetailScreen),
    InventoryHistory(InventoryHistoryScreen),
    Reports(ReportsScreen),
    UserDirectory(UserDirectoryScreen),
}

impl ScreenKind {
    /// Route name of the built screen.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::BookBrowse(_) => "books",
            ScreenKind::BookDetail(_) => "book-detail",
            ScreenKind::InventoryHistory(_) => "inventory-history",
            ScreenKind::Reports(_) => "reports",
            ScreenKind::UserDirectory(_) => "users",
        }
    }
}

/// One registry row: route name, navigation title, constructor.
pub struct ScreenEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub build: fn(Arc<StoreClient>) -> ScreenKind,
}

/// Every screen the client can navigate to, listed explicitly.
///
/// Navigation resolves route names against this table; a screen missing
/// here fails the registry test instead of failing a tap in the field.
pub const SCREENS: &[ScreenEntry] = &[
    ScreenEntry {
        name: "books",
        title: "Browse Books",
        build: |client| ScreenKind::BookBrowse(BookBrowseScreen::new(client)),
    },
    ScreenEntry {
        name: "book-detail",
        title: "Book Details",
        build: |client| ScreenKind::BookDetail(BookDetailScreen::new(client)),
    },
    ScreenEntry {
        name: "inventory-history",
        title: "Inventory History",
        build: |client| ScreenKind::InventoryHistory(InventoryHistoryScreen::new(client)),
    },
    ScreenEntry {
        name: "reports",
        title: "Reports",
        build: |client| ScreenKind::Reports(ReportsScreen::new(client)),
    },
    ScreenEntry {
        name: "users",
        title: "Manage Users",
        build: |client| ScreenKind::UserDirectory(UserDirectoryScreen::new(client)),
    },
];

/// Look a screen up by route name.
pub fn find(name: &str) -> Option<&'static ScreenEntry> {
    SCREENS.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_are_unique() {
        for (i, entry) in SCREENS.iter().enumerate() {
            assert!(
                SCREENS[i + 1..].iter().all(|other| other.name != entry.name),
                "duplicate route {}",
                entry.name
            );
        }
    }

    #[test]
    fn unknown_routes_resolve_to_none() {
        assert!(find("checkout").is_none());
        assert!(find("users").is_some());
    }
}
