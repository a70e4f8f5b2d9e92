use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON, so the
/// client can recover the kind and field errors from the message string.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_server_fn_message() {
        let mut fields = std::collections::HashMap::new();
        fields.insert("email".to_string(), "Email is taken.".to_string());
        let original = AppError::validation("The given data was invalid.", fields);

        let wrapped = original.clone().into_server_fn_error().to_string();
        let recovered = AppError::from_server_error(&wrapped).unwrap();
        assert_eq!(recovered, original);
    }
}
