//! Typed client for the books API.
//!
//! Every operation issues exactly one request. Non-2xx responses become
//! [`ClientError::Api`] carrying the status and the response body text;
//! nothing is retried.

pub mod error;
pub mod models;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::{ParseError, Url};

pub use error::{ClientError, Result};
pub use models::{
    Book, BookListResponse, BookQuery, CreateBookRequest, Sale, SalesQuery, SalesResponse, SortBy,
    SortOrder, UpdateBookRequest,
};

use models::{SellRequest, StockUpdate};

/// Handle to the books API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for `base_url`, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Url(ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /books` with paging, search and sort parameters.
    pub async fn list_books(&self, query: &BookQuery) -> Result<BookListResponse> {
        let request = self
            .request(Method::GET, &["books"])?
            .query(&query.pairs());
        let page: BookListResponse = self.send_json(request).await?;
        tracing::debug!(
            page = page.page,
            total = page.total,
            total_pages = page.total_pages,
            "fetched book page"
        );
        Ok(page)
    }

    /// `GET /books/:id`
    pub async fn get_book(&self, id: &str) -> Result<Book> {
        let request = self.request(Method::GET, &["books", id])?;
        self.send_json(request).await
    }

    /// `POST /books`
    pub async fn create_book(&self, book: &CreateBookRequest) -> Result<Book> {
        let request = self.request(Method::POST, &["books"])?.json(book);
        let created: Book = self.send_json(request).await?;
        tracing::info!(book_id = %created.id, title = %created.title, "book created");
        Ok(created)
    }

    /// `PUT /books/:id` with only the fields to change.
    pub async fn update_book(&self, id: &str, changes: &UpdateBookRequest) -> Result<Book> {
        let request = self.request(Method::PUT, &["books", id])?.json(changes);
        let updated: Book = self.send_json(request).await?;
        tracing::info!(book_id = %updated.id, "book updated");
        Ok(updated)
    }

    /// `DELETE /books/:id`. Any 2xx, including an empty 204, is success.
    pub async fn delete_book(&self, id: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &["books", id])?;
        self.send(request).await?;
        tracing::info!(book_id = %id, "book deleted");
        Ok(())
    }

    /// `PATCH /books/:id/stock`
    pub async fn update_stock(&self, id: &str, stock: u32) -> Result<Book> {
        let request = self
            .request(Method::PATCH, &["books", id, "stock"])?
            .json(&StockUpdate { stock });
        let updated: Book = self.send_json(request).await?;
        tracing::info!(book_id = %id, stock = updated.stock, "stock updated");
        Ok(updated)
    }

    /// `POST /books/:id/sell`; the API decrements stock and records a sale.
    pub async fn sell_book(&self, id: &str, quantity: u32) -> Result<Book> {
        let request = self
            .request(Method::POST, &["books", id, "sell"])?
            .json(&SellRequest { quantity });
        let sold: Book = self.send_json(request).await?;
        tracing::info!(book_id = %id, quantity, stock = sold.stock, "book sold");
        Ok(sold)
    }

    /// `GET /sales`
    pub async fn list_sales(&self, query: &SalesQuery) -> Result<SalesResponse> {
        let request = self
            .request(Method::GET, &["sales"])?
            .query(&query.pairs());
        self.send_json(request).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        tracing::debug!(%method, %url, "books API request");
        Ok(self.http.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "An error occurred".to_string());
        tracing::warn!(status = status.as_u16(), body = %body, "books API returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(ClientError::Decode)
    }
}
