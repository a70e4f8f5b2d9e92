use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    ApiUnreachable,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::ApiUnreachable => write!(f, "ApiUnreachable"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across the gateway and the client.
///
/// `field_errors` carries the per-field validation messages the school API
/// returns in its `errors` map, already flattened to one message per field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ApiUnreachable,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Build an AppError from a school-API error payload.
    ///
    /// The API reports failures as `{"message": "...", "errors": {"field":
    /// ["msg", ...]}}` (sometimes `"error"` instead of `"message"`). Only
    /// the first message per field is kept.
    pub fn from_remote_payload(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("The request could not be completed.")
            .to_string();

        let mut field_errors = HashMap::new();
        if let Some(errors) = body.get("errors").and_then(Value::as_object) {
            for (field, msgs) in errors {
                let first = match msgs {
                    Value::Array(list) => list.first().and_then(Value::as_str),
                    Value::String(s) => Some(s.as_str()),
                    _ => None,
                };
                if let Some(msg) = first {
                    field_errors.insert(field.clone(), msg.to_string());
                }
            }
        }

        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            400 => AppErrorKind::BadRequest,
            _ => AppErrorKind::InternalError,
        };

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// Message suitable for a toast: the server message with any field
    /// errors concatenated after it.
    pub fn toast_message(&self) -> String {
        if self.field_errors.is_empty() {
            return self.message.clone();
        }
        let mut fields: Vec<&String> = self.field_errors.keys().collect();
        fields.sort();
        let details = fields
            .iter()
            .map(|f| self.field_errors[*f].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}", self.message, details)
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"Unauthorized",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        // Try direct parse first (in case the string is raw JSON)
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        // Extract the JSON object embedded between the first `{` and last `}`
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract per-field validation errors from a `ServerFnError.to_string()`.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Extract a user-friendly toast message from a `ServerFnError.to_string()`.
    ///
    /// Falls back to a generic message if parsing fails.
    pub fn friendly_message(error_string: &str) -> String {
        if let Some(app_error) = Self::from_server_error(error_string) {
            app_error.toast_message()
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_payload_message_and_field_errors() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email field is required."],
                "name": ["The name field is required."]
            }
        });
        let err = AppError::from_remote_payload(422, &body);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "The given data was invalid.");
        assert_eq!(
            err.field_errors.get("email").map(String::as_str),
            Some("The email field is required.")
        );
    }

    #[test]
    fn remote_payload_error_key_fallback() {
        let body = json!({"error": "Token expired"});
        let err = AppError::from_remote_payload(401, &body);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Token expired");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn remote_payload_without_message_uses_default() {
        let body = json!({});
        let err = AppError::from_remote_payload(500, &body);
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.message, "The request could not be completed.");
    }

    #[test]
    fn toast_message_appends_field_errors_in_key_order() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Name is required.".to_string());
        fields.insert("email".to_string(), "Email is invalid.".to_string());
        let err = AppError::validation("Validation failed.", fields);
        assert_eq!(
            err.toast_message(),
            "Validation failed. Email is invalid. Name is required."
        );
    }

    #[test]
    fn toast_message_without_fields_is_plain() {
        let err = AppError::forbidden("Managers only");
        assert_eq!(err.toast_message(), "Managers only");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Student not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Student not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("garbage input"),
            "Something went wrong. Please try again."
        );
    }
}
