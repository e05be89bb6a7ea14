use shelf_client::Book;

use crate::listing::ListPage;
use crate::views::pagination::pagination;

/// Result count, card grid (or empty state) and pagination of a list page.
pub fn list_section(listing: &ListPage, card: impl Fn(&Book) -> String) -> String {
    let mut html = String::new();

    if listing.list.is_empty() {
        if listing.error.is_none() {
            let hint = if listing.query.search.trim().is_empty() {
                "No books available at the moment."
            } else {
                "Try adjusting your search terms."
            };
            html.push_str(&format!(
                "<div class=\"empty\">\n<h3>No books found</h3>\n<p>{hint}</p>\n</div>\n"
            ));
        }
        return html;
    }

    html.push_str(&format!(
        "<p class=\"count\">Showing {} of {} books</p>\n<div class=\"grid\">\n",
        listing.list.books.len(),
        listing.list.total,
    ));
    for book in &listing.list.books {
        html.push_str(&card(book));
    }
    html.push_str("</div>\n");

    if let Some(control) = listing.pagination() {
        html.push_str(&pagination(&control, |page| listing.page_href(page)));
    }
    html
}
