use serde::Deserialize;
use serde_json::Value;
use shared_types::{AppError, AuthUser, ListQuery, OptionItem, PaginatedResponse, Row};

/// Successful login payload from the school API.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// HTTP client for the remote school API.
///
/// Every call forwards the caller's opaque session token as a bearer
/// header; the API is the authority on authorization and validation, the
/// gateway only translates its answers.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    base: String,
    http: reqwest::Client,
}

impl RemoteApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the configured school API.
    pub fn from_env() -> Self {
        Self::new(crate::config::get().api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// Fetch one page of an entity list.
    ///
    /// POST `<entity>/index` with the filter/sort/pagination payload.
    pub async fn index(
        &self,
        entity: &str,
        query: &ListQuery,
        token: &str,
    ) -> Result<PaginatedResponse<Row>, AppError> {
        let entity = validate_entity(entity)?;
        let body = self
            .send(
                self.http
                    .post(self.url(&format!("{entity}/index")))
                    .bearer_auth(token)
                    .json(query),
            )
            .await?;
        serde_json::from_value(body)
            .map_err(|e| AppError::internal(format!("malformed list envelope: {e}")))
    }

    /// POST `<entity>/store`, returning the created row.
    pub async fn create(&self, entity: &str, payload: &Value, token: &str) -> Result<Row, AppError> {
        let entity = validate_entity(entity)?;
        let body = self
            .send(
                self.http
                    .post(self.url(&format!("{entity}/store")))
                    .bearer_auth(token)
                    .json(payload),
            )
            .await?;
        Ok(extract_row(body))
    }

    /// PUT `<entity>/update/{id}`, returning the updated row.
    pub async fn update(
        &self,
        entity: &str,
        id: &str,
        payload: &Value,
        token: &str,
    ) -> Result<Row, AppError> {
        let entity = validate_entity(entity)?;
        let body = self
            .send(
                self.http
                    .put(self.url(&format!("{entity}/update/{id}")))
                    .bearer_auth(token)
                    .json(payload),
            )
            .await?;
        Ok(extract_row(body))
    }

    /// DELETE `<entity>/delete/{id}`.
    pub async fn delete(&self, entity: &str, id: &str, token: &str) -> Result<(), AppError> {
        let entity = validate_entity(entity)?;
        self.send(
            self.http
                .delete(self.url(&format!("{entity}/delete/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    /// POST `<entity>/delete-many` with `{"ids": [...]}`.
    pub async fn delete_many(
        &self,
        entity: &str,
        ids: &[String],
        token: &str,
    ) -> Result<(), AppError> {
        let entity = validate_entity(entity)?;
        self.send(
            self.http
                .post(self.url(&format!("{entity}/delete-many")))
                .bearer_auth(token)
                .json(&serde_json::json!({ "ids": ids })),
        )
        .await?;
        Ok(())
    }

    /// GET `options/{source}`: the side-channel datasets for select and
    /// picker fields.
    pub async fn options(&self, source: &str, token: &str) -> Result<Vec<OptionItem>, AppError> {
        let source = validate_entity(source)?;
        let body = self
            .send(
                self.http
                    .get(self.url(&format!("options/{source}")))
                    .bearer_auth(token),
            )
            .await?;
        let list = body.get("data").cloned().unwrap_or(body);
        serde_json::from_value(list)
            .map_err(|e| AppError::internal(format!("malformed options payload: {e}")))
    }

    /// GET `dashboard/stats`: headline counters for the role dashboards.
    pub async fn stats(&self, token: &str) -> Result<std::collections::HashMap<String, i64>, AppError> {
        let body = self
            .send(self.http.get(self.url("dashboard/stats")).bearer_auth(token))
            .await?;
        let data = body.get("data").cloned().unwrap_or(body);
        serde_json::from_value(data)
            .map_err(|e| AppError::internal(format!("malformed stats payload: {e}")))
    }

    /// POST `login` with email/password credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = self
            .send(
                self.http
                    .post(self.url("login"))
                    .json(&serde_json::json!({ "email": email, "password": password })),
            )
            .await?;
        serde_json::from_value(body)
            .map_err(|e| AppError::internal(format!("malformed login payload: {e}")))
    }

    /// GET `me`: resolve the session token to its user.
    pub async fn me(&self, token: &str) -> Result<AuthUser, AppError> {
        let body = self
            .send(self.http.get(self.url("me")).bearer_auth(token))
            .await?;
        let user = body.get("user").or(body.get("data")).cloned().unwrap_or(body);
        serde_json::from_value(user)
            .map_err(|e| AppError::internal(format!("malformed user payload: {e}")))
    }

    /// Execute a request and translate the response.
    ///
    /// Non-2xx responses become `AppError` via the API's error payload;
    /// transport failures become `ApiUnreachable`.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "school API unreachable");
            AppError::unreachable("The school service is unreachable. Please try again.")
        })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            Ok(body)
        } else {
            let err = AppError::from_remote_payload(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), kind = %err.kind, "school API error");
            Err(err)
        }
    }
}

/// Mutation responses either wrap the row under `data` or return it bare.
fn extract_row(body: Value) -> Row {
    let row = body.get("data").cloned().unwrap_or(body);
    serde_json::from_value(row).unwrap_or_default()
}

/// Entity endpoints are single path segments from a fixed alphabet; reject
/// anything that could rewrite the request path.
fn validate_entity(entity: &str) -> Result<&str, AppError> {
    let ok = !entity.is_empty()
        && entity
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if ok {
        Ok(entity)
    } else {
        Err(AppError::bad_request(format!(
            "invalid entity endpoint: {entity:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_names_are_single_lowercase_segments() {
        assert!(validate_entity("teacher").is_ok());
        assert!(validate_entity("fee_payment").is_ok());
        assert!(validate_entity("classe").is_ok());
        assert!(validate_entity("").is_err());
        assert!(validate_entity("teacher/../admin").is_err());
        assert!(validate_entity("Teacher").is_err());
    }

    #[test]
    fn extract_row_unwraps_data_envelope() {
        let wrapped = serde_json::json!({"data": {"id": 3, "name": "Sara"}});
        assert_eq!(extract_row(wrapped).id(), "3");

        let bare = serde_json::json!({"id": "4", "name": "Omar"});
        assert_eq!(extract_row(bare).id(), "4");
    }
}
