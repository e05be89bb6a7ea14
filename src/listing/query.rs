//! List query state and its URL encoding.

use serde::Deserialize;
use shelf_client::{BookQuery, SortBy, SortOrder};
use url::form_urlencoded;

/// Raw query string of a list page. Everything is optional text so that a
/// hand-edited or stale URL never fails extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListQuery {
    pub page: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// The only client-owned state of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// 0-based page index.
    pub page: u32,
    pub search: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl QueryState {
    /// Parse from the URL; malformed values fall back to their defaults.
    pub fn from_raw(raw: &RawListQuery) -> Self {
        Self {
            page: raw
                .page
                .as_deref()
                .and_then(|page| page.trim().parse().ok())
                .unwrap_or(0),
            search: raw.search.clone().unwrap_or_default(),
            sort_by: raw
                .sort_by
                .as_deref()
                .and_then(|sort| sort.parse().ok())
                .unwrap_or_default(),
            sort_order: raw
                .sort_order
                .as_deref()
                .and_then(|order| order.parse().ok())
                .unwrap_or_default(),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Committing a search always goes back to the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 0,
            search: search.into(),
            ..self.clone()
        }
    }

    /// Clicking the active sort field flips the order; another field starts ascending.
    pub fn with_sort(&self, sort_by: SortBy) -> Self {
        let sort_order = if self.sort_by == sort_by {
            self.sort_order.reversed()
        } else {
            SortOrder::Asc
        };
        Self {
            sort_by,
            sort_order,
            ..self.clone()
        }
    }

    /// Query string mirroring this state (without the leading `?`).
    /// An empty search is omitted; sort parameters only when `sortable`.
    pub fn to_query_string(&self, sortable: bool) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page.to_string());
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if sortable {
            serializer.append_pair("sortBy", self.sort_by.as_str());
            serializer.append_pair("sortOrder", self.sort_order.as_str());
        }
        serializer.finish()
    }

    pub fn href(&self, base_path: &str, sortable: bool) -> String {
        format!("{}?{}", base_path, self.to_query_string(sortable))
    }

    /// Parameters for `GET /books`.
    pub fn to_book_query(&self, limit: u32, sortable: bool) -> BookQuery {
        BookQuery {
            page: Some(self.page),
            limit: Some(limit),
            search: Some(self.search.trim().to_string()).filter(|s| !s.is_empty()),
            genre: None,
            sort_by: sortable.then_some(self.sort_by),
            sort_order: sortable.then_some(self.sort_order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(page: &str, search: &str, sort_by: &str, sort_order: &str) -> RawListQuery {
        RawListQuery {
            page: Some(page.to_string()),
            search: Some(search.to_string()),
            sort_by: Some(sort_by.to_string()),
            sort_order: Some(sort_order.to_string()),
        }
    }

    #[test]
    fn parses_all_four_fields() {
        let state = QueryState::from_raw(&raw("3", "dune", "price", "desc"));
        assert_eq!(
            state,
            QueryState {
                page: 3,
                search: "dune".to_string(),
                sort_by: SortBy::Price,
                sort_order: SortOrder::Desc,
            }
        );
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let state = QueryState::from_raw(&raw("-1", "", "rating", "sideways"));
        assert_eq!(state, QueryState::default());
        assert_eq!(QueryState::from_raw(&RawListQuery::default()), QueryState::default());
    }

    #[test]
    fn search_resets_page() {
        let state = QueryState::from_raw(&raw("4", "old", "author", "desc"));
        let next = state.with_search("new");
        assert_eq!(next.page, 0);
        assert_eq!(next.search, "new");
        assert_eq!(next.sort_by, SortBy::Author);
        assert_eq!(next.sort_order, SortOrder::Desc);
    }

    #[test]
    fn sort_toggles_on_active_field_and_resets_on_new_field() {
        let state = QueryState::default();
        let toggled = state.with_sort(SortBy::Title);
        assert_eq!(toggled.sort_order, SortOrder::Desc);
        assert_eq!(toggled.with_sort(SortBy::Title).sort_order, SortOrder::Asc);

        let switched = toggled.with_sort(SortBy::Price);
        assert_eq!(switched.sort_by, SortBy::Price);
        assert_eq!(switched.sort_order, SortOrder::Asc);
    }

    #[test]
    fn sort_keeps_page_and_search() {
        let state = QueryState::from_raw(&raw("2", "rust", "title", "asc"));
        let next = state.with_sort(SortBy::CreatedAt);
        assert_eq!(next.page, 2);
        assert_eq!(next.search, "rust");
    }

    #[test]
    fn query_string_round_trips_through_parsing() {
        let state = QueryState {
            page: 1,
            search: "war & peace".to_string(),
            sort_by: SortBy::CreatedAt,
            sort_order: SortOrder::Desc,
        };
        let encoded = state.to_query_string(true);
        assert_eq!(encoded, "page=1&search=war+%26+peace&sortBy=createdAt&sortOrder=desc");

        let pairs: std::collections::HashMap<String, String> =
            form_urlencoded::parse(encoded.as_bytes()).into_owned().collect();
        let decoded = QueryState::from_raw(&RawListQuery {
            page: pairs.get("page").cloned(),
            search: pairs.get("search").cloned(),
            sort_by: pairs.get("sortBy").cloned(),
            sort_order: pairs.get("sortOrder").cloned(),
        });
        assert_eq!(decoded, state);
    }

    #[test]
    fn unsortable_views_omit_sort_and_empty_search() {
        let state = QueryState::default().with_page(5);
        assert_eq!(state.href("/admin/books", false), "/admin/books?page=5");
    }

    #[test]
    fn book_query_trims_search_and_respects_sortable() {
        let state = QueryState::default().with_search("  tolkien ");
        let query = state.to_book_query(10, false);
        assert_eq!(query.search.as_deref(), Some("tolkien"));
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.sort_by, None);

        let blank = QueryState::default().with_search("   ").to_book_query(10, true);
        assert_eq!(blank.search, None);
        assert_eq!(blank.sort_by, Some(SortBy::Title));
    }
}
