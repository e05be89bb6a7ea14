//! Sales analytics for the admin console.

mod summary;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use shelf_client::{SalesQuery, SalesResponse};
use shelf_http::html::escape;
use shelf_kernel::{InitCtx, Module};
use url::form_urlencoded;

use crate::listing::paginate;
use crate::state::AppState;
use crate::utils::{format_date, format_price, path_segment};
use crate::views::{self, Section};

use summary::{title_of, SalesSummary};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSalesQuery {
    page: Option<String>,
    book_id: Option<String>,
}

/// 0-based page and optional book filter of the sales page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SalesFilter {
    page: u32,
    book_id: Option<String>,
}

impl SalesFilter {
    fn from_raw(raw: &RawSalesQuery) -> Self {
        Self {
            page: raw
                .page
                .as_deref()
                .and_then(|page| page.trim().parse().ok())
                .unwrap_or(0),
            book_id: raw
                .book_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    fn href(&self, page: u32) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &page.to_string());
        if let Some(book_id) = &self.book_id {
            serializer.append_pair("bookId", book_id);
        }
        format!("/admin/sales?{}", serializer.finish())
    }
}

pub struct SalesModule {
    state: AppState,
}

impl SalesModule {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for SalesModule {
    fn name(&self) -> &'static str {
        "sales"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "sales module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/admin/sales", get(list_sales))
            .with_state(self.state.clone())
    }
}

async fn list_sales(
    State(state): State<AppState>,
    Query(raw): Query<RawSalesQuery>,
) -> Html<String> {
    let filter = SalesFilter::from_raw(&raw);
    let query = SalesQuery {
        page: Some(filter.page),
        limit: Some(state.ui.page_size),
        book_id: filter.book_id.clone(),
    };

    let mut main = String::from(
        "<p><a href=\"/admin/books\">&larr; Back to Manage Books</a></p>\n<h1>Sales Analytics</h1>\n",
    );
    if let Some(book_id) = &filter.book_id {
        main.push_str(&format!(
            "<p>Showing sales for book <code>{}</code> &middot; <a href=\"/admin/sales\">Show all sales</a></p>\n",
            escape(book_id)
        ));
    }

    match state.client.list_sales(&query).await {
        Ok(response) => main.push_str(&render_sales(&filter, &response)),
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch sales");
            main.push_str(&views::banner("error", &err.to_string()));
        }
    }
    views::page("Sales Analytics", Section::Admin, &main)
}

fn render_sales(filter: &SalesFilter, response: &SalesResponse) -> String {
    let summary = SalesSummary::of(response);
    let mut html = format!(
        "<div class=\"grid\">\n\
         <div class=\"card\"><div class=\"body\"><p>Total sales</p><h2>{}</h2></div></div>\n\
         <div class=\"card\"><div class=\"body\"><p>Units on this page</p><h2>{}</h2></div></div>\n\
         <div class=\"card\"><div class=\"body\"><p>Revenue on this page</p><h2>{}</h2></div></div>\n\
         </div>\n",
        summary.total_sales,
        summary.units,
        format_price(summary.revenue),
    );

    if !summary.top_titles.is_empty() {
        html.push_str("<h2>Best sellers on this page</h2>\n<ol>\n");
        for top in &summary.top_titles {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a> ({} sold)</li>\n",
                escape(&SalesFilter { page: 0, book_id: Some(top.book_id.clone()) }.href(0)),
                escape(&top.title),
                top.units
            ));
        }
        html.push_str("</ol>\n");
    }

    if response.sales.is_empty() {
        html.push_str("<div class=\"empty\">\n<h3>No sales recorded</h3>\n</div>\n");
        return html;
    }

    html.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Book</th><th>Quantity</th><th>Total</th></tr></thead>\n<tbody>\n",
    );
    for sale in &response.sales {
        html.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"/books/{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
            format_date(&sale.sale_date),
            path_segment(&sale.book_id),
            escape(title_of(sale)),
            sale.quantity,
            format_price(sale.total_price),
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    if let Some(control) = paginate(filter.page.saturating_add(1), response.total_pages) {
        html.push_str(&views::pagination(&control, |page| {
            filter.href(page.saturating_sub(1))
        }));
    }
    html
}

pub fn create_module(state: AppState) -> Arc<dyn Module> {
    Arc::new(SalesModule::new(state))
}
