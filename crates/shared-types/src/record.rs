use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of an entity list, as the school API returns it.
///
/// Rows are opaque to the rendering layer: a JSON object keyed by field
/// name, identified by `id`. The client never invents or rewrites rows;
/// every change round-trips through the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Map<String, Value>);

impl Row {
    /// The server-assigned identifier, or empty when the payload is malformed.
    pub fn id(&self) -> String {
        match self.0.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String view of a field, with numbers and booleans stringified and
    /// everything else degrading to an empty string.
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn id_accepts_numeric_and_string_forms() {
        assert_eq!(row(json!({"id": 42})).id(), "42");
        assert_eq!(row(json!({"id": "stu-42"})).id(), "stu-42");
        assert_eq!(row(json!({"name": "no id"})).id(), "");
    }

    #[test]
    fn display_degrades_to_empty_string() {
        let r = row(json!({"name": "Sara", "age": 9, "active": true, "tags": []}));
        assert_eq!(r.display("name"), "Sara");
        assert_eq!(r.display("age"), "9");
        assert_eq!(r.display("active"), "true");
        assert_eq!(r.display("tags"), "");
        assert_eq!(r.display("missing"), "");
    }
}
