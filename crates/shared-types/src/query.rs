use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Payload for POST `<entity>/index`.
///
/// Field names follow the school API's wire convention (`orderBy`,
/// `perPage`, ...). `paginate` is always true from the admin tables; the
/// API also serves unpaginated lists to exports, which this client does
/// not use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub filters: Map<String, Value>,
    #[serde(rename = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(rename = "orderByDirection")]
    pub order_by_direction: SortDirection,
    #[serde(rename = "perPage")]
    pub per_page: i64,
    pub page: i64,
    pub paginate: bool,
}

/// Client-held query state for one entity table.
///
/// Ephemeral by design: constructed fresh on navigation, never persisted.
/// Mutations that change which rows match (search, filters, sort) snap the
/// page back to 1 so the user is never left staring at an empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub filters: Map<String, Value>,
    pub sort_key: Option<String>,
    pub direction: SortDirection,
    pub page: i64,
    pub per_page: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Map::new(),
            sort_key: None,
            direction: SortDirection::Asc,
            page: 1,
            per_page: 10,
        }
    }
}

impl QueryState {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Set or clear one filter. Empty string values clear the filter so a
    /// "-- all --" select option needs no special casing at call sites.
    pub fn set_filter(&mut self, key: &str, value: Value) {
        let cleared = matches!(&value, Value::Null)
            || matches!(&value, Value::String(s) if s.is_empty());
        if cleared {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value);
        }
        self.page = 1;
    }

    /// Sort by `key`, flipping direction when the key is already active.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn to_list_query(&self) -> ListQuery {
        ListQuery {
            search: if self.search.trim().is_empty() {
                None
            } else {
                Some(self.search.trim().to_string())
            },
            filters: self.filters.clone(),
            order_by: self.sort_key.clone(),
            order_by_direction: self.direction,
            per_page: self.per_page,
            page: self.page,
            paginate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn list_query_uses_wire_field_names() {
        let mut state = QueryState::default();
        state.set_filter("classe_id", json!(3));
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.page = 2;

        let payload = serde_json::to_value(state.to_list_query()).unwrap();
        assert_eq!(
            payload,
            json!({
                "filters": {"classe_id": 3},
                "orderBy": "name",
                "orderByDirection": "desc",
                "perPage": 10,
                "page": 2,
                "paginate": true
            })
        );
    }

    #[test]
    fn blank_search_is_omitted() {
        let mut state = QueryState::default();
        state.set_search("   ");
        let payload = serde_json::to_value(state.to_list_query()).unwrap();
        assert!(payload.get("search").is_none());

        state.set_search(" Sara ");
        let payload = serde_json::to_value(state.to_list_query()).unwrap();
        assert_eq!(payload["search"], json!("Sara"));
    }

    #[test]
    fn search_and_filters_reset_the_page() {
        let mut state = QueryState::default();
        state.page = 4;
        state.set_search("ali");
        assert_eq!(state.page, 1);

        state.page = 4;
        state.set_filter("status", json!("active"));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn empty_filter_value_clears_the_entry() {
        let mut state = QueryState::default();
        state.set_filter("status", json!("active"));
        assert_eq!(state.filters.len(), 1);
        state.set_filter("status", json!(""));
        assert!(state.filters.is_empty());
        state.set_filter("status", Value::Null);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn toggle_sort_flips_direction_only_on_same_key() {
        let mut state = QueryState::default();
        state.toggle_sort("name");
        assert_eq!(state.direction, SortDirection::Asc);
        state.toggle_sort("name");
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle_sort("created_at");
        assert_eq!(state.sort_key.as_deref(), Some("created_at"));
        assert_eq!(state.direction, SortDirection::Asc);
    }
}
