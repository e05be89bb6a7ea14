//! Wire types of the books API. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<u64>,
}

impl Book {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// One page of books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Body of `POST /books`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `PUT /books/:id`. Absent fields are left untouched by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<CreateBookRequest> for UpdateBookRequest {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            title: Some(req.title),
            author: Some(req.author),
            isbn: Some(req.isbn),
            price: Some(req.price),
            stock: Some(req.stock),
            description: req.description,
            published_date: req.published_date,
            genre: req.genre,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct StockUpdate {
    pub stock: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct SellRequest {
    pub quantity: u32,
}

/// Field a book listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Title,
    Author,
    Price,
    CreatedAt,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Title,
        SortBy::Author,
        SortBy::Price,
        SortBy::CreatedAt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::Author => "author",
            SortBy::Price => "price",
            SortBy::CreatedAt => "createdAt",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .ok_or_else(|| UnknownVariant(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// Query parameters of `GET /books`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl BookQuery {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(genre) = self.genre.as_deref().filter(|g| !g.is_empty()) {
            pairs.push(("genre", genre.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// A completed purchase, produced by the API when a sell succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "ids::string_or_number")]
    pub book_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "timestamp")]
    pub sale_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesResponse {
    pub sales: Vec<Sale>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Query parameters of `GET /sales`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub book_id: Option<String>,
}

impl SalesQuery {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(book_id) = self.book_id.as_deref().filter(|id| !id.is_empty()) {
            pairs.push(("bookId", book_id.to_string()));
        }
        pairs
    }
}

mod ids {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    /// Ids arrive as strings from some backends and as integers from others.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        })
    }
}

/// RFC 3339 timestamps; values without an offset are taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn book_json() -> serde_json::Value {
        json!({
            "id": "1",
            "title": "Test Book",
            "author": "Test Author",
            "isbn": "1234567890123",
            "price": 29.99,
            "stock": 10,
            "description": "A test book for testing purposes",
            "genre": "Fiction",
            "imageUrl": "https://example.com/book.jpg",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn book_decodes_camel_case_payload() {
        let book: Book = serde_json::from_value(book_json()).unwrap();
        assert_eq!(book.id, "1");
        assert_eq!(book.price, Decimal::new(2999, 2));
        assert_eq!(book.image_url.as_deref(), Some("https://example.com/book.jpg"));
        assert_eq!(book.total_sales, None);
        assert!(book.in_stock());
    }

    #[test]
    fn numeric_ids_and_offsetless_timestamps_are_accepted() {
        let mut raw = book_json();
        raw["id"] = json!(42);
        raw["createdAt"] = json!("2024-03-05T10:15:30.123");
        let book: Book = serde_json::from_value(raw).unwrap();
        assert_eq!(book.id, "42");
        assert_eq!(book.created_at.to_rfc3339(), "2024-03-05T10:15:30.123+00:00");
    }

    #[test]
    fn create_request_omits_empty_optionals() {
        let req = CreateBookRequest {
            title: "New Test Book".to_string(),
            author: "New Test Author".to_string(),
            isbn: "9876543210987".to_string(),
            price: Decimal::new(1999, 2),
            stock: 5,
            description: None,
            published_date: None,
            genre: Some("Non-Fiction".to_string()),
            image_url: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "title": "New Test Book",
                "author": "New Test Author",
                "isbn": "9876543210987",
                "price": 19.99,
                "stock": 5,
                "genre": "Non-Fiction"
            })
        );
    }

    #[test]
    fn partial_update_only_serializes_present_fields() {
        let req = UpdateBookRequest {
            stock: Some(3),
            genre: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "stock": 3, "genre": "" })
        );
    }

    #[test]
    fn sort_values_parse_from_query_strings() {
        assert_eq!("createdAt".parse::<SortBy>().unwrap(), SortBy::CreatedAt);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("rating".parse::<SortBy>().is_err());
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
    }

    #[test]
    fn book_query_skips_unset_and_empty_values() {
        let query = BookQuery {
            page: Some(0),
            limit: Some(10),
            search: Some(String::new()),
            sort_by: Some(SortBy::Price),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("page", "0".to_string()),
                ("limit", "10".to_string()),
                ("sortBy", "price".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn sale_decodes_with_book_snapshot() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 7,
            "bookId": "1",
            "book": book_json(),
            "quantity": 2,
            "totalPrice": 59.98,
            "saleDate": "2024-02-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(sale.id, "7");
        assert_eq!(sale.total_price, Decimal::new(5998, 2));
        assert_eq!(sale.book.unwrap().title, "Test Book");
    }
}
