use axum::response::Html;
use shelf_client::Book;
use shelf_http::html::escape;

use crate::listing::ListPage;
use crate::state::AppState;
use crate::utils::{format_date, format_price, format_published, path_segment};
use crate::views::{self, CardOptions, Message, Section};

pub fn list(state: &AppState, listing: &ListPage) -> Html<String> {
    let query_string = listing.query.to_query_string(listing.view.sortable);
    let mut main = String::from(
        "<h1>Book Catalog</h1>\n<p>Discover and purchase your next favorite book</p>\n",
    );
    main.push_str(&views::search_bar(listing, state.ui.search_debounce_ms));
    main.push_str(&views::sort_bar(listing));
    if let Some(error) = &listing.error {
        main.push_str(&views::banner("error", error));
    }
    main.push_str(&views::list_section(listing, |book| {
        let options = CardOptions {
            sell_action: Some(format!(
                "/books/{}/sell?{}",
                path_segment(&book.id),
                query_string
            )),
            controls: None,
        };
        views::book_card(book, &state.images, &options)
    }));
    views::page("Browse Books", Section::Catalog, &main)
}

pub fn detail(state: &AppState, book: &Book, message: Option<Message>) -> Html<String> {
    let id = escape(&book.id);
    let mut main = String::from("<p><a href=\"/books\">&larr; Back to Book List</a></p>\n");
    if let Some(message) = message {
        main.push_str(&message.render());
    }

    main.push_str("<article class=\"card detail\">\n");
    main.push_str(&views::cover(book, &state.images));
    main.push_str(&format!(
        "<div class=\"body\">\n<h1>{}</h1>\n<p>by {}</p>\n",
        escape(&book.title),
        escape(&book.author)
    ));
    if let Some(genre) = book.genre.as_deref().filter(|g| !g.is_empty()) {
        main.push_str(&format!("<span class=\"badge genre\">{}</span>\n", escape(genre)));
    }
    main.push_str(&format!(
        "<p><strong class=\"price\">{}</strong> {}</p>\n",
        format_price(book.price),
        views::stock_badge(book.stock)
    ));

    if book.in_stock() {
        let action = format!("/books/{}/sell", path_segment(&book.id));
        main.push_str(&views::buy_form(&action, "detail"));
    } else {
        main.push_str("<button class=\"button\" type=\"button\" disabled>Out of Stock</button>\n");
    }
    main.push_str("<a class=\"button muted\" href=\"/admin/books\">Manage Books</a>\n");

    if let Some(description) = book.description.as_deref().filter(|d| !d.is_empty()) {
        main.push_str(&format!(
            "<h2>Description</h2>\n<p class=\"description\">{}</p>\n",
            escape(description)
        ));
    }

    main.push_str("<h2>Book Details</h2>\n<dl>\n");
    main.push_str(&format!("<dt>ISBN</dt><dd>{}</dd>\n", escape(&book.isbn)));
    if let Some(published) = book.published_date.as_deref().filter(|d| !d.is_empty()) {
        main.push_str(&format!(
            "<dt>Published</dt><dd>{}</dd>\n",
            escape(&format_published(published))
        ));
    }
    main.push_str(&format!(
        "<dt>Added</dt><dd>{}</dd>\n<dt>Updated</dt><dd>{}</dd>\n",
        format_date(&book.created_at),
        format_date(&book.updated_at)
    ));
    if let Some(total_sales) = book.total_sales {
        main.push_str(&format!("<dt>Copies sold</dt><dd>{total_sales}</dd>\n"));
    }
    main.push_str(&format!(
        "</dl>\n<p><small>Book ID: {id}</small></p>\n</div>\n</article>\n"
    ));

    views::page(&book.title, Section::Catalog, &main)
}
