mod common;

use common::{book, book_list, no_redirects, spawn_app};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Listing ─────────────────────────────────────────────────────

#[tokio::test]
async fn catalog_renders_cards_count_and_pagination() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "title"))
        .and(query_param("sortOrder", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_list(
            vec![book("1", "Dune", 3), book("2", "Emma", 0)],
            25,
            0,
            3,
        )))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = reqwest::get(format!("{base}/books")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();

    assert!(body.contains("Showing 2 of 25 books"));
    assert!(body.contains(">Dune</a>"));
    assert!(body.contains("3 in stock"));
    assert!(body.contains("Out of stock"));
    // Only the book with stock offers a purchase.
    assert_eq!(body.matches("Buy Now").count(), 1);

    assert!(body.contains("<span class=\"current\" aria-current=\"page\">1</span>"));
    assert!(body.contains("<span class=\"disabled\" aria-disabled=\"true\">Previous</span>"));
    assert!(body.contains("href=\"/books?page=1&amp;sortBy=title&amp;sortOrder=asc\">Next</a>"));
}

#[tokio::test]
async fn query_state_is_forwarded_to_the_api() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", "4"))
        .and(query_param("search", "dune"))
        .and(query_param("sortBy", "price"))
        .and(query_param("sortOrder", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_list(vec![], 0, 4, 0)))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let body = reqwest::get(format!(
        "{base}/books?page=4&search=dune&sortBy=price&sortOrder=desc"
    ))
    .await
    .unwrap()
    .text()
    .await
    .unwrap();

    assert!(body.contains("No books found"));
    assert!(body.contains("Try adjusting your search terms."));
    assert!(body.contains(">Price ↓</a>"));
}

#[tokio::test]
async fn out_of_range_page_index_still_renders() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", "4294967295"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_list(
            vec![book("1", "Dune", 3)],
            21,
            4294967295,
            3,
        )))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = reqwest::get(format!("{base}/books?page=4294967295")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();

    assert!(body.contains(">Dune</a>"));
    assert!(body.contains("<span class=\"current\" aria-current=\"page\">3</span>"));
    assert!(body.contains("<span class=\"disabled\" aria-disabled=\"true\">Next</span>"));
}

#[tokio::test]
async fn search_box_commits_after_the_debounce_delay() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_list(vec![], 0, 0, 0)))
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let body = reqwest::get(format!("{base}/books?search=emma"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("data-debounce-ms=\"300\""));
    assert!(body.contains("name=\"search\" value=\"emma\""));
    assert!(body.contains("window.location.replace"));
    assert!(body.contains("params.set('page', '0')"));
}

#[tokio::test]
async fn api_failure_shows_the_message_in_place_of_books() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = reqwest::get(format!("{base}/books")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();

    assert!(body.contains("<div class=\"banner error\" role=\"alert\">database offline</div>"));
    assert!(!body.contains("No books found"));
}

#[tokio::test]
async fn root_redirects_to_the_catalog() {
    let api = MockServer::start().await;
    let base = spawn_app(&api).await;

    let resp = no_redirects().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/books");
}

// ── Detail ──────────────────────────────────────────────────────

#[tokio::test]
async fn detail_page_shows_book_facts() {
    let api = MockServer::start().await;
    let mut dune = book("1", "Dune", 2);
    dune["description"] = json!("Spice & sand");
    dune["publishedDate"] = json!("1965-08-01");
    Mock::given(method("GET"))
        .and(path("/api/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune))
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let body = reqwest::get(format!("{base}/books/1"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("<h1>Dune</h1>"));
    assert!(body.contains("Spice &amp; sand"));
    assert!(body.contains("<dd>8/1/1965</dd>"));
    assert!(body.contains("<dd>1/1/2024</dd>"));
    assert!(body.contains("Buy Now"));
    assert!(body.contains("Manage Books"));
    assert!(body.contains("Back to Book List"));
}

#[tokio::test]
async fn unknown_book_renders_not_found_page() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No book with id missing"))
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = reqwest::get(format!("{base}/books/missing")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Book not found"));
    assert!(body.contains("No book with id missing"));
    assert!(body.contains("Back to Book List"));
}

// ── Selling ─────────────────────────────────────────────────────

#[tokio::test]
async fn selling_the_last_copy_removes_the_buy_action() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books/1/sell"))
        .and(body_json(json!({ "quantity": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(book("1", "Dune", 0)))
        .expect(1)
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book("1", "Dune", 0)))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/books/1/sell"))
        .form(&[("quantity", "1"), ("from", "detail")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();

    assert!(body.contains("Sold 1 copy."));
    assert!(body.contains("Out of stock"));
    assert!(body.contains("disabled>Out of Stock</button>"));
    assert!(!body.contains("Buy Now"));
}

#[tokio::test]
async fn selling_from_the_list_redirects_back_to_the_same_list() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books/1/sell"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book("1", "Dune", 4)))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let resp = no_redirects()
        .post(format!(
            "{base}/books/1/sell?page=2&search=du&sortBy=price&sortOrder=desc"
        ))
        .form(&[("quantity", "1"), ("from", "list")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers()["location"],
        "/books?page=2&search=du&sortBy=price&sortOrder=desc"
    );
}

#[tokio::test]
async fn failed_sale_keeps_the_list_and_shows_the_error() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books/1/sell"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Insufficient stock"))
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_list(
            vec![book("1", "Dune", 1)],
            1,
            0,
            1,
        )))
        .mount(&api)
        .await;

    let base = spawn_app(&api).await;
    let body = reqwest::Client::new()
        .post(format!("{base}/books/1/sell?page=0"))
        .form(&[("quantity", "1"), ("from", "list")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Insufficient stock"));
    assert!(body.contains("1 in stock"));
    assert!(body.contains("Buy Now"));
}

// ── Shell ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_and_unknown_routes() {
    let api = MockServer::start().await;
    let base = spawn_app(&api).await;

    let health = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(health.status(), 200);
    assert!(health.headers().contains_key("x-request-id"));

    let missing = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(missing.status(), 404);
    assert!(missing.text().await.unwrap().contains("Back to Book List"));
}
