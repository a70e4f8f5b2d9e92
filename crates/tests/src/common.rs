use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const GOOD_TOKEN: &str = "token-abc";

/// Shared state of the mock school API: a student table, every captured
/// `index` payload, and a switch that makes mutations fail.
#[derive(Clone, Default)]
pub struct MockState {
    pub rows: Arc<Mutex<Vec<Value>>>,
    pub index_payloads: Arc<Mutex<Vec<Value>>>,
    pub fail_mutations: Arc<Mutex<bool>>,
}

impl MockState {
    pub fn with_students(count: usize) -> Self {
        let state = Self::default();
        {
            let mut rows = state.rows.lock().unwrap();
            for i in 1..=count {
                rows.push(json!({"id": i, "name": format!("Student {i}"), "active": true}));
            }
        }
        state
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        *self.fail_mutations.lock().unwrap() = fail;
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn last_index_payload(&self) -> Option<Value> {
        self.index_payloads.lock().unwrap().last().cloned()
    }
}

/// Spawn the mock API on an ephemeral port and return its base URL.
pub async fn spawn_mock_api(state: MockState) -> String {
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/me", get(me))
        .route("/api/options/{source}", get(options))
        .route("/api/student/index", post(index))
        .route("/api/student/store", post(store))
        .route("/api/student/update/{id}", put(update))
        .route("/api/student/delete/{id}", delete(destroy))
        .route("/api/student/delete-many", post(destroy_many))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {GOOD_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Unauthenticated."})),
    )
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == json!("director@school.example") && body["password"] == json!("secret") {
        (
            StatusCode::OK,
            Json(json!({
                "token": GOOD_TOKEN,
                "user": {
                    "id": 1,
                    "name": "Amina",
                    "email": "director@school.example",
                    "role": "director"
                }
            })),
        )
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"email": ["These credentials do not match our records."]}
            })),
        )
    }
}

async fn me(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "user": {
                "id": 1,
                "name": "Amina",
                "email": "director@school.example",
                "role": "director"
            }
        })),
    )
}

async fn options(headers: HeaderMap, Path(source): Path<String>) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    let data = match source.as_str() {
        "classes" => json!([
            {"value": 1, "label": "Grade 1 - A"},
            {"value": 2, "label": "Grade 1 - B"}
        ]),
        _ => json!([]),
    };
    (StatusCode::OK, Json(json!({ "data": data })))
}

async fn index(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    state.index_payloads.lock().unwrap().push(payload.clone());

    let rows = state.rows.lock().unwrap().clone();
    let per_page = payload["perPage"].as_i64().unwrap_or(10).max(1);
    let page = payload["page"].as_i64().unwrap_or(1).max(1);
    let total = rows.len() as i64;
    let last_page = ((total + per_page - 1) / per_page).max(1);
    let start = ((page - 1) * per_page) as usize;
    let data: Vec<Value> = rows
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "data": data,
            "meta": {
                "current_page": page,
                "last_page": last_page,
                "total": total,
                "per_page": per_page
            }
        })),
    )
}

async fn store(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    if *state.fail_mutations.lock().unwrap() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["The name field is required."]}
            })),
        );
    }
    let mut rows = state.rows.lock().unwrap();
    let id = rows.len() as i64 + 1;
    let mut row = payload;
    row["id"] = json!(id);
    rows.push(row.clone());
    (StatusCode::OK, Json(json!({ "data": row })))
}

async fn update(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    if *state.fail_mutations.lock().unwrap() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["The name field is required."]}
            })),
        );
    }
    let mut rows = state.rows.lock().unwrap();
    match rows.iter_mut().find(|r| r["id"] == json!(id)) {
        Some(row) => {
            for (key, value) in payload.as_object().cloned().unwrap_or_default() {
                row[key.as_str()] = value;
            }
            (StatusCode::OK, Json(json!({ "data": row.clone() })))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Student not found."})),
        ),
    }
}

async fn destroy(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut rows = state.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| r["id"] != json!(id));
    if rows.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Student not found."})),
        );
    }
    (StatusCode::OK, Json(json!({"message": "Deleted."})))
}

async fn destroy_many(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    let ids: Vec<Value> = payload["ids"].as_array().cloned().unwrap_or_default();
    let mut rows = state.rows.lock().unwrap();
    rows.retain(|r| !ids.iter().any(|id| *id == r["id"] || *id == json!(r["id"].to_string())));
    (StatusCode::OK, Json(json!({"message": "Deleted."})))
}
