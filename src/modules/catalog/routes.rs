use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use shelf_http::error::AppError;

use super::pages;
use crate::listing::{ListView, RawListQuery};
use crate::modules::book_load_error;
use crate::state::AppState;
use crate::views::Message;

/// Body of the "Buy Now" forms.
#[derive(Debug, Default, Deserialize)]
pub struct SellForm {
    #[serde(default)]
    quantity: Option<String>,
    /// `detail` when posted from a book page; anything else means a list.
    #[serde(default)]
    from: Option<String>,
}

impl SellForm {
    /// Defaults to one unit; zero or garbage also means one.
    fn quantity(&self) -> u32 {
        self.quantity
            .as_deref()
            .and_then(|q| q.trim().parse().ok())
            .filter(|q| *q > 0)
            .unwrap_or(1)
    }

    fn from_detail(&self) -> bool {
        self.from.as_deref() == Some("detail")
    }
}

pub async fn index() -> Redirect {
    Redirect::to("/books")
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(raw): Query<RawListQuery>,
) -> Html<String> {
    let view = ListView::catalog(state.ui.page_size);
    let listing = view.load(&state.client, view.query(&raw)).await;
    pages::list(&state, &listing)
}

pub async fn show_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let book = state.client.get_book(&id).await.map_err(book_load_error)?;
    Ok(pages::detail(&state, &book, None))
}

pub async fn sell_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
    Form(form): Form<SellForm>,
) -> Result<Response, AppError> {
    let quantity = form.quantity();
    let sold = state.client.sell_book(&id, quantity).await;

    if form.from_detail() {
        let message = match &sold {
            Ok(_) => Message::Notice(format!(
                "Sold {quantity} {}.",
                if quantity == 1 { "copy" } else { "copies" }
            )),
            Err(err) => {
                tracing::warn!(book_id = %id, error = %err, "sale failed");
                Message::Error(err.to_string())
            }
        };
        let book = state.client.get_book(&id).await.map_err(book_load_error)?;
        return Ok(pages::detail(&state, &book, Some(message)).into_response());
    }

    let view = ListView::catalog(state.ui.page_size);
    let query = view.query(&raw);
    match sold {
        Ok(_) => Ok(Redirect::to(&view.href(&query)).into_response()),
        Err(err) => {
            tracing::warn!(book_id = %id, error = %err, "sale failed");
            let mut listing = view.load(&state.client, query).await;
            listing.error = Some(err.to_string());
            Ok(pages::list(&state, &listing).into_response())
        }
    }
}
