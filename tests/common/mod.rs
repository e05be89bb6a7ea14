#![allow(dead_code)]

use serde_json::{json, Value};
use shelf_kernel::settings::Settings;
use wiremock::MockServer;

pub fn book(id: &str, title: &str, stock: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Test Author",
        "isbn": "1234567890123",
        "price": 29.99,
        "stock": stock,
        "genre": "Fiction",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

pub fn book_list(books: Vec<Value>, total: u64, page: u32, total_pages: u32) -> Value {
    json!({
        "books": books,
        "total": total,
        "page": page,
        "limit": 10,
        "totalPages": total_pages
    })
}

/// Spin up the app on an OS-assigned port against `api`, returning its base URL.
pub async fn spawn_app(api: &MockServer) -> String {
    let mut settings = Settings::default();
    settings.api.base_url = format!("{}/api", api.uri());

    let app = shelf_app::build_app(&settings).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Client that reports redirects instead of following them.
pub fn no_redirects() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
