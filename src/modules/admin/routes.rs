//! Admin handlers. Every mutation first loads the list page it will answer
//! with, then calls the API, and only reconciles that list once the API has
//! confirmed the change.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use shelf_client::ClientError;
use shelf_http::error::AppError;

use super::form::BookForm;
use super::pages;
use crate::listing::{ListView, QueryState, RawListQuery};
use crate::modules::book_load_error;
use crate::state::AppState;
use crate::utils::path_segment;
use crate::views::Message;

#[derive(Debug, Default, Deserialize)]
pub struct StockForm {
    #[serde(default)]
    stock: String,
}

fn view(state: &AppState) -> ListView {
    ListView::admin(state.ui.page_size)
}

fn query_string(view: &ListView, query: &QueryState) -> String {
    query.to_query_string(view.sortable)
}

/// Status for a form re-rendered after the API refused it.
fn refusal_status(err: &ClientError) -> StatusCode {
    err.status()
        .and_then(|status| StatusCode::from_u16(status).ok())
        .filter(StatusCode::is_client_error)
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

pub async fn index() -> Redirect {
    Redirect::to("/admin/books")
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(raw): Query<RawListQuery>,
) -> Html<String> {
    let view = view(&state);
    let listing = view.load(&state.client, view.query(&raw)).await;
    pages::list(&state, &listing, None)
}

pub async fn new_book(State(state): State<AppState>, Query(raw): Query<RawListQuery>) -> Html<String> {
    let view = view(&state);
    let query = view.query(&raw);
    pages::form(
        "Add New Book",
        &BookForm::default(),
        &[],
        &format!("/admin/books?{}", query_string(&view, &query)),
        "Add Book",
        &view.href(&query),
    )
}

pub async fn create_book(
    State(state): State<AppState>,
    Query(raw): Query<RawListQuery>,
    Form(form): Form<BookForm>,
) -> Response {
    let view = view(&state);
    let query = view.query(&raw);
    let action = format!("/admin/books?{}", query_string(&view, &query));
    let render_form = |errors: &[String]| {
        pages::form("Add New Book", &form, errors, &action, "Add Book", &view.href(&query))
    };

    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, render_form(&errors)).into_response();
        }
    };

    let mut listing = view.load(&state.client, query.clone()).await;
    match state.client.create_book(&request).await {
        Ok(book) => {
            let notice = format!("Added \"{}\".", book.title);
            listing.list.prepend(book);
            pages::list(&state, &listing, Some(Message::Notice(notice))).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "create book failed");
            (refusal_status(&err), render_form(&[err.to_string()])).into_response()
        }
    }
}

pub async fn edit_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
) -> Result<Html<String>, AppError> {
    let view = view(&state);
    let query = view.query(&raw);
    let book = state.client.get_book(&id).await.map_err(book_load_error)?;
    Ok(pages::form(
        "Edit Book",
        &BookForm::from(&book),
        &[],
        &format!(
            "/admin/books/{}?{}",
            path_segment(&book.id),
            query_string(&view, &query)
        ),
        "Update Book",
        &view.href(&query),
    ))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
    Form(form): Form<BookForm>,
) -> Response {
    let view = view(&state);
    let query = view.query(&raw);
    let action = format!(
        "/admin/books/{}?{}",
        path_segment(&id),
        query_string(&view, &query)
    );
    let render_form = |errors: &[String]| {
        pages::form("Edit Book", &form, errors, &action, "Update Book", &view.href(&query))
    };

    let changes = match form.validate_update() {
        Ok(changes) => changes,
        Err(errors) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, render_form(&errors)).into_response();
        }
    };

    let mut listing = view.load(&state.client, query.clone()).await;
    match state.client.update_book(&id, &changes).await {
        Ok(book) => {
            let notice = format!("Updated \"{}\".", book.title);
            listing.list.patch(book);
            pages::list(&state, &listing, Some(Message::Notice(notice))).into_response()
        }
        Err(err) => {
            tracing::warn!(book_id = %id, error = %err, "update book failed");
            (refusal_status(&err), render_form(&[err.to_string()])).into_response()
        }
    }
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
) -> Result<Html<String>, AppError> {
    let view = view(&state);
    let query = view.query(&raw);
    let book = state.client.get_book(&id).await.map_err(book_load_error)?;
    Ok(pages::confirm_delete(
        &book,
        &format!(
            "/admin/books/{}/delete?{}",
            path_segment(&book.id),
            query_string(&view, &query)
        ),
        &view.href(&query),
    ))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
) -> Html<String> {
    let view = view(&state);
    let mut listing = view.load(&state.client, view.query(&raw)).await;
    let message = match state.client.delete_book(&id).await {
        Ok(()) => {
            listing.list.remove(&id);
            Message::Notice("Book deleted.".to_string())
        }
        Err(err) => {
            tracing::warn!(book_id = %id, error = %err, "delete book failed");
            Message::Error(err.to_string())
        }
    };
    pages::list(&state, &listing, Some(message))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawListQuery>,
    Form(form): Form<StockForm>,
) -> Response {
    let view = view(&state);
    let mut listing = view.load(&state.client, view.query(&raw)).await;

    let Ok(stock) = form.stock.trim().parse::<u32>() else {
        let message = Message::Error(format!(
            "Stock must be a whole number of at least 0, got \"{}\"",
            form.stock.trim()
        ));
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            pages::list(&state, &listing, Some(message)),
        )
            .into_response();
    };

    let message = match state.client.update_stock(&id, stock).await {
        Ok(book) => {
            let notice = format!("Stock for \"{}\" set to {}.", book.title, book.stock);
            listing.list.patch(book);
            Message::Notice(notice)
        }
        Err(err) => {
            tracing::warn!(book_id = %id, error = %err, "stock update failed");
            Message::Error(err.to_string())
        }
    };
    pages::list(&state, &listing, Some(message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_client_errors_keep_their_status() {
        let conflict = ClientError::Api {
            status: 409,
            body: "duplicate isbn".to_string(),
        };
        assert_eq!(refusal_status(&conflict), StatusCode::CONFLICT);

        let broken = ClientError::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(refusal_status(&broken), StatusCode::BAD_GATEWAY);
    }
}
