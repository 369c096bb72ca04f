//! Wishlist and cart endpoints for the signed-in shopper.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::StoreClient;
use crate::dto::{AddCartItemDto, WishlistItemDto};
use crate::error::ApiError;

/// Typed client for the signed-in shopper's wishlist and cart.
#[derive(Clone)]
pub struct ShoppingApi {
    client: Arc<StoreClient>,
}

impl ShoppingApi {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// The whole wishlist; small enough that it is never paginated.
    pub async fn wishlist(&self) -> Result<Vec<WishlistItemDto>, ApiError> {
        self.client.get_json("wishlist", &[]).await
    }

    pub async fn add_to_wishlist(&self, book_id: Uuid) -> Result<(), ApiError> {
        self.client.post_empty(&format!("wishlist/{book_id}")).await
    }

    pub async fn remove_from_wishlist(&self, book_id: Uuid) -> Result<(), ApiError> {
        self.client.delete(&format!("wishlist/{book_id}")).await
    }

    /// Add a book to the cart, or bump the quantity of its existing line.
    pub async fn add_cart_item(&self, item: &AddCartItemDto) -> Result<(), ApiError> {
        self.client.post_json("cart/items", item).await
    }
}
