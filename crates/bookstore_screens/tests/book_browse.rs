use std::sync::Arc;

use bookstore_api::StoreClient;
use bookstore_screens::BookBrowseScreen;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<StoreClient> {
    Arc::new(StoreClient::new(&format!("{}/api", server.uri())).unwrap())
}

fn books_body(ids: std::ops::Range<u32>) -> serde_json::Value {
    let books: Vec<_> = ids
        .map(|n| {
            json!({
                "id": Uuid::from_u128(n.into()),
                "title": format!("Book {n}"),
                "price": 9.99,
                "stockQuantity": 5
            })
        })
        .collect();
    json!(books)
}

#[tokio::test]
async fn full_pages_keep_the_catalog_growing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_body(0..12)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_body(12..15)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = BookBrowseScreen::new(client_for(&server));
    screen.refresh().await.unwrap();

    // No total on this endpoint; a full page means keep going.
    assert!(screen.can_load_more());
    assert_eq!(screen.paging_info(), "Showing 12 entries. Page 1");

    screen.load_more().await.unwrap();
    assert_eq!(screen.books().len(), 15);
    assert!(!screen.can_load_more(), "a short page ends the list");

    screen.load_more().await.unwrap();
    assert_eq!(screen.books().len(), 15);
}

#[tokio::test]
async fn staged_criteria_reach_the_wire_together() {
    let server = MockServer::start().await;
    let category = Uuid::from_u128(77);
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("categoryId", category.to_string()))
        .and(query_param("search", "twain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_body(0..4)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = BookBrowseScreen::new(client_for(&server));
    screen.set_category(Some(category));
    screen.set_search("  twain  ");

    screen.apply_filters().await.unwrap();
    assert_eq!(screen.books().len(), 4);
}

#[tokio::test]
async fn blank_search_drops_the_criterion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_body(0..2)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = BookBrowseScreen::new(client_for(&server));
    screen.set_search("twain");
    screen.set_search("   ");

    screen.apply_filters().await.unwrap();
    assert_eq!(screen.books().len(), 2);
}
