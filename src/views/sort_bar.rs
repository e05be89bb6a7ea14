use shelf_client::{SortBy, SortOrder};
use shelf_http::html::escape;

use crate::listing::ListPage;

fn label(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Title => "Title",
        SortBy::Author => "Author",
        SortBy::Price => "Price",
        SortBy::CreatedAt => "Date Added",
    }
}

/// Sort links; the active field shows its direction.
pub fn sort_bar(listing: &ListPage) -> String {
    let mut html = String::from("<div class=\"sort\">\n<span>Sort by:</span>\n");
    for sort_by in SortBy::ALL {
        let next = listing.query.with_sort(sort_by);
        let active = listing.query.sort_by == sort_by;
        let arrow = match (active, listing.query.sort_order) {
            (false, _) => "",
            (true, SortOrder::Asc) => " ↑",
            (true, SortOrder::Desc) => " ↓",
        };
        html.push_str(&format!(
            "<a class=\"button{}\" href=\"{}\">{}{}</a>\n",
            if active { "" } else { " muted" },
            escape(&listing.view.href(&next)),
            label(sort_by),
            arrow,
        ));
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListState, ListView, QueryState};

    #[test]
    fn active_field_toggles_and_others_start_ascending() {
        let listing = ListPage {
            view: ListView::catalog(10),
            query: QueryState {
                page: 2,
                search: String::new(),
                sort_by: SortBy::Price,
                sort_order: SortOrder::Asc,
            },
            list: ListState::empty(),
            error: None,
        };
        let html = sort_bar(&listing);
        assert!(html.contains(
            "href=\"/books?page=2&amp;sortBy=price&amp;sortOrder=desc\">Price ↑</a>"
        ));
        assert!(html.contains(
            "href=\"/books?page=2&amp;sortBy=author&amp;sortOrder=asc\">Author</a>"
        ));
        assert!(html.contains(">Date Added</a>"));
    }
}
