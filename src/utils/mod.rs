//! Display formatting shared by the page views.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Money rounded to cents, halves away from zero.
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `$29.99`
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", round_price(price))
}

/// A book id percent-encoded for use as a single URL path segment.
pub fn path_segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Dates as `M/D/YYYY`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Published dates come as either full timestamps or bare dates; anything
/// else is shown as given.
pub fn format_published(raw: &str) -> String {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return format_date(&at.with_timezone(&Utc));
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Stock badge text.
pub fn stock_label(stock: u32) -> String {
    if stock > 0 {
        format!("{stock} in stock")
    } else {
        "Out of stock".to_string()
    }
}
