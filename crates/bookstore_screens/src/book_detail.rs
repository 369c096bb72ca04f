use std::sync::Arc;

use bookstore_api::{
    AddCartItemDto, BookDto, CatalogApi, LoadError, ReviewDto, ShoppingApi, StoreClient,
};
use client_logging::{store_info, store_warn};
use uuid::Uuid;

/// Reviews shown on the page before "see all".
const REVIEWS_SHOWN: u32 = 5;

/// View model for one book's detail page: the book itself, its first
/// reviews, wishlist membership and the quantity stepper.
pub struct BookDetailScreen {
    catalog: CatalogApi,
    shopping: ShoppingApi,
    book: Option<BookDto>,
    reviews: Vec<ReviewDto>,
    in_wishlist: bool,
    quantity: u32,
}

impl BookDetailScreen {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self {
            catalog: CatalogApi::new(client.clone()),
            shopping: ShoppingApi::new(client),
            book: None,
            reviews: Vec::new(),
            in_wishlist: false,
            quantity: 1,
        }
    }

    pub fn title(&self) -> &str {
        self.book
            .as_ref()
            .map(|book| book.title.as_str())
            .unwrap_or("Book Details")
    }

    /// Load the book plus its page furniture.
    ///
    /// Only the book itself is load-bearing. Reviews and wishlist state are
    /// page furniture: when they fail (e.g. wishlist while signed out) the
    /// page still renders, so those errors are logged and dropped.
    pub async fn load(&mut self, book_id: Uuid) -> Result<(), LoadError> {
        self.book = None;
        self.reviews.clear();
        self.in_wishlist = false;
        self.quantity = 1;

        let book = self.catalog.book_by_id(book_id).await?;
        store_info!("book detail loaded: {} ({})", book.title, book_id);

        match self.catalog.book_reviews(book_id, 1, REVIEWS_SHOWN).await {
            Ok(reviews) => self.reviews = reviews,
            Err(err) => store_warn!("reviews unavailable for {}: {}", book_id, err),
        }
        match self.shopping.wishlist().await {
            Ok(items) => self.in_wishlist = items.iter().any(|item| item.book_id == book_id),
            Err(err) => store_warn!("wishlist check skipped: {}", err),
        }

        self.book = Some(book);
        Ok(())
    }

    pub fn book(&self) -> Option<&BookDto> {
        self.book.as_ref()
    }

    pub fn reviews(&self) -> &[ReviewDto] {
        &self.reviews
    }

    pub fn in_wishlist(&self) -> bool {
        self.in_wishlist
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn stock(&self) -> u32 {
        self.book
            .as_ref()
            .map(|book| book.stock_quantity.max(0) as u32)
            .unwrap_or(0)
    }

    /// Step the quantity up, capped at the available stock.
    pub fn increment_quantity(&mut self) {
        if self.quantity < self.stock() {
            self.quantity += 1;
        }
    }

    /// Step the quantity down, never below one.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.quantity >= 1 && self.quantity <= self.stock()
    }

    /// Add or remove the loaded book from the wishlist; returns the new
    /// membership.
    pub async fn toggle_wishlist(&mut self) -> Result<bool, LoadError> {
        let Some(book) = &self.book else {
            return Ok(false);
        };
        if self.in_wishlist {
            self.shopping.remove_from_wishlist(book.id).await?;
            self.in_wishlist = false;
        } else {
            self.shopping.add_to_wishlist(book.id).await?;
            self.in_wishlist = true;
        }
        Ok(self.in_wishlist)
    }

    /// Put the selected quantity in the cart. A no-op when the stepper is
    /// outside the purchasable range, mirroring a disabled button.
    pub async fn add_to_cart(&self) -> Result<(), LoadError> {
        let Some(book) = &self.book else {
            return Ok(());
        };
        if !self.can_add_to_cart() {
            return Ok(());
        }
        self.shopping
            .add_cart_item(&AddCartItemDto {
                book_id: book.id,
                quantity: self.quantity,
            })
            .await?;
        store_info!("added {} x{} to cart", book.id, self.quantity);
        Ok(())
    }
}
