use std::collections::HashMap;

use rust_decimal::Decimal;
use shelf_client::{Sale, SalesResponse};

/// Best sellers listed in the summary.
const TOP_TITLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTitle {
    pub book_id: String,
    pub title: String,
    pub units: u64,
}

/// Figures for one fetched page of sales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummary {
    /// Sales recorded overall, across every page.
    pub total_sales: u64,
    pub units: u64,
    pub revenue: Decimal,
    pub top_titles: Vec<TopTitle>,
}

pub fn title_of(sale: &Sale) -> &str {
    sale.book
        .as_ref()
        .map(|book| book.title.as_str())
        .unwrap_or(sale.book_id.as_str())
}

impl SalesSummary {
    pub fn of(response: &SalesResponse) -> Self {
        let mut per_book: HashMap<&str, TopTitle> = HashMap::new();
        for sale in &response.sales {
            per_book
                .entry(sale.book_id.as_str())
                .or_insert_with(|| TopTitle {
                    book_id: sale.book_id.clone(),
                    title: title_of(sale).to_string(),
                    units: 0,
                })
                .units += u64::from(sale.quantity);
        }

        let mut top_titles: Vec<TopTitle> = per_book.into_values().collect();
        top_titles.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.title.cmp(&b.title)));
        top_titles.truncate(TOP_TITLES);

        Self {
            total_sales: response.total,
            units: response.sales.iter().map(|s| u64::from(s.quantity)).sum(),
            revenue: response.sales.iter().map(|s| s.total_price).sum(),
            top_titles,
        }
    }
}
