use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{AuthUser, ListQuery, OptionItem, PaginatedResponse, Row};

/// Extract the caller's session token from the request cookies.
/// Returns an "Authentication required" error when absent.
#[cfg(feature = "server")]
pub(crate) fn require_session() -> Result<String, ServerFnError> {
    use crate::auth::cookies;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let headers = ctx.parts_mut().headers.clone();
    cookies::extract_session_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Sign in against the school API and store the issued token in the
/// session cookie.
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let response = RemoteApi::from_env()
        .login(&email, &password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookie(&response.token);
    Ok(response.user)
}

/// Drop the session. The cookie is cleared even if the API call fails;
/// the token dies on our side regardless.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    cookies::schedule_clear_cookie();
    Ok(())
}

/// Resolve the current session to its user. `None` means "not signed in",
/// including the case of a token the API no longer accepts.
#[server]
pub async fn current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::remote::RemoteApi;
    use shared_types::AppErrorKind;

    let Ok(token) = require_session() else {
        return Ok(None);
    };

    match RemoteApi::from_env().me(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(err) if err.kind == AppErrorKind::Unauthorized => {
            cookies::schedule_clear_cookie();
            Ok(None)
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, "current_user lookup failed");
            Ok(None)
        }
    }
}

/// Fetch one page of an entity list.
#[server]
pub async fn list_rows(
    entity: String,
    query: ListQuery,
) -> Result<PaginatedResponse<Row>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .index(&entity, &query, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Create a row for the given entity.
#[server]
pub async fn create_row(entity: String, payload: Value) -> Result<Row, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .create(&entity, &payload, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Update an existing row.
#[server]
pub async fn update_row(entity: String, id: String, payload: Value) -> Result<Row, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .update(&entity, &id, &payload, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Delete one row.
#[server]
pub async fn delete_row(entity: String, id: String) -> Result<(), ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .delete(&entity, &id, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Delete a batch of rows (bulk action from the table).
#[server]
pub async fn delete_rows(entity: String, ids: Vec<String>) -> Result<(), ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .delete_many(&entity, &ids, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Headline counters for the role dashboards.
#[server]
pub async fn load_stats() -> Result<std::collections::HashMap<String, i64>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .stats(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Load a named options source for select/picker fields.
#[server]
pub async fn load_options(source: String) -> Result<Vec<OptionItem>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::remote::RemoteApi;

    let token = require_session()?;
    RemoteApi::from_env()
        .options(&source, &token)
        .await
        .map_err(|e| e.into_server_fn_error())
}
