use shelf_client::Book;
use shelf_http::html::escape;

use crate::utils::{format_price, path_segment, stock_label};
use crate::views::image::ImagePolicy;

/// What a card offers besides the book details.
#[derive(Debug, Clone, Default)]
pub struct CardOptions {
    /// Form action for "Buy Now"; the button is only shown while in stock.
    pub sell_action: Option<String>,
    /// Extra controls rendered under the details (admin edit/delete/stock).
    pub controls: Option<String>,
}

pub fn book_card(book: &Book, images: &ImagePolicy, options: &CardOptions) -> String {
    let id = path_segment(&book.id);
    let mut html = String::with_capacity(1024);
    html.push_str("<article class=\"card\">\n");
    html.push_str(&cover(book, images));
    html.push_str("<div class=\"body\">\n");
    html.push_str(&format!(
        "<h3><a href=\"/books/{id}\">{}</a></h3>\n<p>by {}</p>\n",
        escape(&book.title),
        escape(&book.author),
    ));
    if let Some(genre) = book.genre.as_deref().filter(|g| !g.is_empty()) {
        html.push_str(&format!("<span class=\"badge genre\">{}</span>\n", escape(genre)));
    }
    html.push_str(&format!(
        "<p><strong class=\"price\">{}</strong> {}</p>\n",
        format_price(book.price),
        stock_badge(book.stock),
    ));
    html.push_str(&format!(
        "<a class=\"button muted\" href=\"/books/{id}\">View Details</a>\n"
    ));
    if let Some(action) = options.sell_action.as_deref() {
        if book.in_stock() {
            html.push_str(&buy_form(action, "list"));
        }
    }
    if let Some(controls) = options.controls.as_deref() {
        html.push_str(controls);
    }
    html.push_str("</div>\n</article>\n");
    html
}

pub fn stock_badge(stock: u32) -> String {
    let class = if stock > 0 { "in-stock" } else { "out-of-stock" };
    format!("<span class=\"badge {class}\">{}</span>", stock_label(stock))
}

/// One-unit sell form. `from` tells the handler which page to answer with.
pub fn buy_form(action: &str, from: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n\
         <input type=\"hidden\" name=\"quantity\" value=\"1\">\n\
         <input type=\"hidden\" name=\"from\" value=\"{}\">\n\
         <button class=\"button buy\" type=\"submit\">Buy Now</button>\n\
         </form>\n",
        escape(action),
        escape(from),
    )
}

/// Cover image when its URL is allowed, otherwise a placeholder.
pub fn cover(book: &Book, images: &ImagePolicy) -> String {
    match book.image_url.as_deref().filter(|url| images.allows(url)) {
        Some(url) => format!(
            "<div class=\"cover\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>\n",
            escape(url),
            escape(&book.title),
        ),
        None => "<div class=\"cover\">&#128214;</div>\n".to_string(),
    }
}
