//! One list-view controller shared by the catalog and the admin console.
//!
//! A view is parameterized by where it lives, how many books a page holds
//! and whether it offers sorting. Everything a user does on a list (search,
//! sort, page) becomes the URL of the next state; each navigation fetches
//! exactly one page from the books API.

pub mod pagination;
pub mod query;
pub mod state;

use shelf_client::ApiClient;

pub use pagination::{paginate, PageItem, Pagination};
pub use query::{QueryState, RawListQuery};
pub use state::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView {
    pub base_path: &'static str,
    pub page_size: u32,
    pub sortable: bool,
}

/// A list view after its fetch: the books, or the message to show instead.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub view: ListView,
    pub query: QueryState,
    pub list: ListState,
    pub error: Option<String>,
}

impl ListView {
    pub fn catalog(page_size: u32) -> Self {
        Self {
            base_path: "/books",
            page_size,
            sortable: true,
        }
    }

    pub fn admin(page_size: u32) -> Self {
        Self {
            base_path: "/admin/books",
            page_size,
            sortable: false,
        }
    }

    /// Normalize a parsed query for this view; unsortable views ignore sort input.
    pub fn query(&self, raw: &RawListQuery) -> QueryState {
        let query = QueryState::from_raw(raw);
        if self.sortable {
            query
        } else {
            QueryState {
                sort_by: Default::default(),
                sort_order: Default::default(),
                ..query
            }
        }
    }

    pub fn href(&self, query: &QueryState) -> String {
        query.href(self.base_path, self.sortable)
    }

    /// Fetch the page described by `query`. A failed fetch yields an empty
    /// list plus the error message rather than failing the request.
    pub async fn load(&self, client: &ApiClient, query: QueryState) -> ListPage {
        let params = query.to_book_query(self.page_size, self.sortable);
        match client.list_books(&params).await {
            Ok(response) => ListPage {
                view: *self,
                query,
                list: response.into(),
                error: None,
            },
            Err(err) => {
                tracing::warn!(view = self.base_path, error = %err, "failed to fetch books");
                ListPage {
                    view: *self,
                    query,
                    list: ListState::empty(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

impl ListPage {
    /// Pagination control for this page, in display numbers.
    pub fn pagination(&self) -> Option<Pagination> {
        paginate(self.query.page.saturating_add(1), self.list.total_pages)
    }

    /// URL of the given 1-based display page.
    pub fn page_href(&self, display_page: u32) -> String {
        self.view
            .href(&self.query.with_page(display_page.saturating_sub(1)))
    }

    pub fn href(&self) -> String {
        self.view.href(&self.query)
    }
}
