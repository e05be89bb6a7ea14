use axum::response::Html;
use shelf_client::Book;
use shelf_http::html::escape;

use super::form::BookForm;
use crate::listing::ListPage;
use crate::state::AppState;
use crate::utils::path_segment;
use crate::views::{self, CardOptions, Message, Section};

fn controls(book: &Book, query_string: &str) -> String {
    let id = path_segment(&book.id);
    let qs = escape(query_string);
    format!(
        "<div class=\"controls\">\n\
         <a class=\"button muted\" href=\"/admin/books/{id}/edit?{qs}\">Edit</a>\n\
         <a class=\"button danger\" href=\"/admin/books/{id}/delete?{qs}\">Delete</a>\n\
         <form class=\"stock\" method=\"post\" action=\"/admin/books/{id}/stock?{qs}\">\n\
         <input type=\"number\" name=\"stock\" min=\"0\" value=\"{stock}\" aria-label=\"Stock for {title}\">\n\
         <button class=\"button muted\" type=\"submit\">Update Stock</button>\n\
         </form>\n</div>\n",
        stock = book.stock,
        title = escape(&book.title),
    )
}

pub fn list(state: &AppState, listing: &ListPage, message: Option<Message>) -> Html<String> {
    let query_string = listing.query.to_query_string(listing.view.sortable);
    let mut main = format!(
        "<h1>Admin Panel</h1>\n<p>Manage your bookstore inventory</p>\n\
         <p>\n<a class=\"button muted\" href=\"/admin/sales\">View Sales Analytics</a>\n\
         <a class=\"button\" href=\"/admin/books/new?{}\">Add New Book</a>\n</p>\n",
        escape(&query_string)
    );
    main.push_str(&views::search_bar(listing, state.ui.search_debounce_ms));
    if let Some(message) = message {
        main.push_str(&message.render());
    }
    if let Some(error) = &listing.error {
        main.push_str(&views::banner("error", error));
    }
    main.push_str(&views::list_section(listing, |book| {
        let options = CardOptions {
            sell_action: None,
            controls: Some(controls(book, &query_string)),
        };
        views::book_card(book, &state.images, &options)
    }));
    views::page("Manage Books", Section::Admin, &main)
}

pub fn form(
    heading: &str,
    form: &BookForm,
    errors: &[String],
    action: &str,
    submit_label: &str,
    cancel_href: &str,
) -> Html<String> {
    let mut main = format!("<h1>{}</h1>\n", escape(heading));
    if !errors.is_empty() {
        main.push_str("<div class=\"banner error\" role=\"alert\">\n<ul>\n");
        for error in errors {
            main.push_str(&format!("<li>{}</li>\n", escape(error)));
        }
        main.push_str("</ul>\n</div>\n");
    }
    main.push_str(&form.render(action, submit_label, cancel_href));
    views::page(heading, Section::Admin, &main)
}

pub fn confirm_delete(book: &Book, action: &str, cancel_href: &str) -> Html<String> {
    let main = format!(
        "<h1>Delete Book</h1>\n<div class=\"card\"><div class=\"body\">\n\
         <p>Are you sure you want to delete this book?</p>\n\
         <p><strong>{title}</strong> by {author}</p>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <a class=\"button muted\" href=\"{cancel}\">Cancel</a>\n\
         <button class=\"button danger\" type=\"submit\">Delete</button>\n\
         </form>\n</div></div>\n",
        title = escape(&book.title),
        author = escape(&book.author),
        action = escape(action),
        cancel = escape(cancel_href),
    );
    views::page("Delete Book", Section::Admin, &main)
}
