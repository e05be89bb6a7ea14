use shelf_http::html::escape;

use crate::listing::{PageItem, Pagination};

/// Render a pagination control. `href` maps a 1-based display page to its URL.
pub fn pagination(control: &Pagination, href: impl Fn(u32) -> String) -> String {
    let link = |page: Option<u32>, label: &str| match page {
        Some(page) => format!("<a href=\"{}\">{label}</a>\n", escape(&href(page))),
        None => format!("<span class=\"disabled\" aria-disabled=\"true\">{label}</span>\n"),
    };

    let mut html = String::from("<nav class=\"pagination\" aria-label=\"Pagination\">\n");
    html.push_str(&link(control.previous, "Previous"));
    for item in &control.items {
        match *item {
            PageItem::Page {
                number,
                current: true,
            } => html.push_str(&format!(
                "<span class=\"current\" aria-current=\"page\">{number}</span>\n"
            )),
            PageItem::Page { number, .. } => html.push_str(&format!(
                "<a href=\"{}\">{number}</a>\n",
                escape(&href(number))
            )),
            PageItem::Ellipsis => html.push_str("<span class=\"ellipsis\">...</span>\n"),
        }
    }
    html.push_str(&link(control.next, "Next"));
    html.push_str("</nav>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::paginate;

    fn render(current: u32, total: u32) -> String {
        let control = paginate(current, total).unwrap();
        pagination(&control, |page| format!("/books?page={}", page - 1))
    }

    #[test]
    fn first_page_disables_previous() {
        let html = render(1, 10);
        assert!(html.contains("<span class=\"disabled\" aria-disabled=\"true\">Previous</span>"));
        assert!(html.contains("<a href=\"/books?page=1\">Next</a>"));
        assert!(html.contains("<span class=\"current\" aria-current=\"page\">1</span>"));
        assert!(html.contains("<a href=\"/books?page=9\">10</a>"));
        assert_eq!(html.matches("...").count(), 1);
    }

    #[test]
    fn middle_pages_show_both_ellipses() {
        let html = render(5, 10);
        assert_eq!(html.matches("class=\"ellipsis\"").count(), 2);
        assert!(html.contains("<a href=\"/books?page=3\">4</a>"));
        assert!(html.contains("<a href=\"/books?page=5\">6</a>"));
    }

    #[test]
    fn last_page_disables_next() {
        let html = render(10, 10);
        assert!(html.contains("<span class=\"disabled\" aria-disabled=\"true\">Next</span>"));
        assert!(html.contains("<a href=\"/books?page=8\">Previous</a>"));
    }
}
