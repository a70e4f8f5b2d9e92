use serde::{Deserialize, Serialize};

/// Paginated response wrapper, matching the school API's list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

/// Pagination metadata exactly as the API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    pub current_page: i64,
    pub last_page: i64,
    pub total: i64,
    pub per_page: i64,
}

impl Default for ListMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
            per_page: 10,
        }
    }
}

impl ListMeta {
    /// The item range currently shown, e.g. "21 to 30 of 47".
    pub fn range_label(&self) -> String {
        let start = ((self.current_page - 1) * self.per_page + 1).min(self.total);
        let end = (self.current_page * self.per_page).min(self.total);
        format!("{} to {} of {}", start.max(0), end.max(0), self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(current_page: i64, last_page: i64, total: i64, per_page: i64) -> ListMeta {
        ListMeta {
            current_page,
            last_page,
            total,
            per_page,
        }
    }

    #[test]
    fn range_label_mid_list() {
        assert_eq!(meta(3, 5, 47, 10).range_label(), "21 to 30 of 47");
    }

    #[test]
    fn range_label_clamps_final_page() {
        assert_eq!(meta(5, 5, 47, 10).range_label(), "41 to 47 of 47");
    }

    #[test]
    fn range_label_empty_list() {
        assert_eq!(meta(1, 1, 0, 10).range_label(), "0 to 0 of 0");
    }

    #[test]
    fn prev_next_flags() {
        let m = meta(1, 4, 40, 10);
        assert!(!m.has_prev());
        assert!(m.has_next());
        let m = meta(4, 4, 40, 10);
        assert!(m.has_prev());
        assert!(!m.has_next());
    }

    #[test]
    fn meta_deserializes_from_api_envelope() {
        let resp: PaginatedResponse<serde_json::Value> = serde_json::from_str(
            r#"{"data":[{"id":1}],"meta":{"current_page":2,"last_page":9,"total":85,"per_page":10}}"#,
        )
        .unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.meta.last_page, 9);
    }
}
