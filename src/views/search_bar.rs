use shelf_http::html::escape;

use crate::listing::ListPage;

/// GET form for the list's search box. Sort state rides along as hidden
/// fields; `page` is left out so a committed search lands on the first page.
pub fn search_bar(listing: &ListPage, debounce_ms: u64) -> String {
    let mut hidden = String::new();
    if listing.view.sortable {
        hidden.push_str(&format!(
            "<input type=\"hidden\" name=\"sortBy\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"sortOrder\" value=\"{}\">\n",
            listing.query.sort_by.as_str(),
            listing.query.sort_order.as_str(),
        ));
    }
    format!(
        "<form class=\"search\" method=\"get\" action=\"{action}\" role=\"search\" \
         data-debounce-ms=\"{debounce_ms}\">\n\
         <input type=\"search\" name=\"search\" value=\"{value}\" \
         placeholder=\"Search books by title or author...\" autocomplete=\"off\">\n\
         {hidden}</form>\n",
        action = listing.view.base_path,
        value = escape(&listing.query.search),
    )
}
