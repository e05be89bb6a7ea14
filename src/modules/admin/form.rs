//! The add/edit book form: raw input, validation, and rendering.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use shelf_client::{Book, CreateBookRequest, UpdateBookRequest};
use shelf_http::html::escape;

use crate::utils::round_price;

/// Submitted form fields, kept as typed so they can be shown back on error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub stock: String,
    pub genre: String,
    pub image_url: String,
    pub published_date: String,
    pub description: String,
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            price: format!("{:.2}", round_price(book.price)),
            stock: book.stock.to_string(),
            genre: book.genre.clone().unwrap_or_default(),
            image_url: book.image_url.clone().unwrap_or_default(),
            published_date: book
                .published_date
                .as_deref()
                .map(|date| date.get(..10).unwrap_or(date).to_string())
                .unwrap_or_default(),
            description: book.description.clone().unwrap_or_default(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

impl BookForm {
    /// Check required fields and numbers. Errors are listed in form order.
    pub fn validate(&self) -> Result<CreateBookRequest, Vec<String>> {
        let mut errors = Vec::new();
        for (label, value) in [
            ("Title", &self.title),
            ("Author", &self.author),
            ("ISBN", &self.isbn),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{label} is required"));
            }
        }

        let price = match self.price.trim() {
            "" => {
                errors.push("Price is required".to_string());
                None
            }
            raw => match Decimal::from_str(raw) {
                Ok(price) if price.is_sign_negative() => {
                    errors.push("Price cannot be negative".to_string());
                    None
                }
                Ok(price) => Some(price),
                Err(_) => {
                    errors.push(format!("Price must be a number, got \"{raw}\""));
                    None
                }
            },
        };

        let stock = match self.stock.trim() {
            "" => {
                errors.push("Stock is required".to_string());
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(stock) => Some(stock),
                Err(_) => {
                    errors.push(format!("Stock must be a whole number of at least 0, got \"{raw}\""));
                    None
                }
            },
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.is_empty() => Ok(CreateBookRequest {
                title: self.title.trim().to_string(),
                author: self.author.trim().to_string(),
                isbn: self.isbn.trim().to_string(),
                price,
                stock,
                description: optional(&self.description),
                published_date: optional(&self.published_date),
                genre: optional(&self.genre),
                image_url: optional(&self.image_url),
            }),
            _ => Err(errors),
        }
    }

    /// Like [`validate`](Self::validate), but a blank optional field is sent
    /// as an empty string so the stored value is cleared.
    pub fn validate_update(&self) -> Result<UpdateBookRequest, Vec<String>> {
        let request = self.validate()?;
        Ok(UpdateBookRequest {
            description: Some(self.description.trim().to_string()),
            published_date: Some(self.published_date.trim().to_string()),
            genre: Some(self.genre.trim().to_string()),
            image_url: Some(self.image_url.trim().to_string()),
            ..UpdateBookRequest::from(request)
        })
    }

    /// Form markup posting to `action`. `cancel_href` leads back to the list.
    pub fn render(&self, action: &str, submit_label: &str, cancel_href: &str) -> String {
        let input = |name: &str, label: &str, kind: &str, value: &str, extra: &str| {
            format!(
                "<label for=\"{name}\">{label}</label>\n\
                 <input type=\"{kind}\" name=\"{name}\" id=\"{name}\" value=\"{}\"{extra}>\n",
                escape(value)
            )
        };
        let mut html = format!(
            "<form class=\"book-form card\" method=\"post\" action=\"{}\">\n<div class=\"body\">\n",
            escape(action)
        );
        html.push_str(&input("title", "Title *", "text", &self.title, " required"));
        html.push_str(&input("author", "Author *", "text", &self.author, " required"));
        html.push_str(&input("isbn", "ISBN *", "text", &self.isbn, " required"));
        html.push_str(&input(
            "price",
            "Price *",
            "number",
            &self.price,
            " step=\"0.01\" min=\"0\" required",
        ));
        html.push_str(&input("stock", "Stock *", "number", &self.stock, " min=\"0\" required"));
        html.push_str(&input("genre", "Genre", "text", &self.genre, ""));
        html.push_str(&input("imageUrl", "Image URL", "url", &self.image_url, ""));
        html.push_str(&input(
            "publishedDate",
            "Published Date",
            "date",
            &self.published_date,
            "",
        ));
        html.push_str(&format!(
            "<label for=\"description\">Description</label>\n\
             <textarea name=\"description\" id=\"description\" rows=\"3\">{}</textarea>\n",
            escape(&self.description)
        ));
        html.push_str(&format!(
            "<p>\n<a class=\"button muted\" href=\"{}\">Cancel</a>\n\
             <button class=\"button\" type=\"submit\">{submit_label}</button>\n</p>\n</div>\n</form>\n",
            escape(cancel_href)
        ));
        html
    }
}
