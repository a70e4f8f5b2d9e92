use crate::common::{self, MockState, GOOD_TOKEN};
use pretty_assertions::assert_eq;
use serde_json::json;
use server::remote::RemoteApi;
use shared_types::{AppErrorKind, QueryState};

#[tokio::test]
async fn index_sends_the_wire_contract_payload() {
    let state = MockState::with_students(25);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    let mut query = QueryState::default();
    query.set_search("sara");
    query.set_filter("classe_id", json!(2));
    query.toggle_sort("name");
    query.page = 2;

    api.index("student", &query.to_list_query(), GOOD_TOKEN)
        .await
        .unwrap();

    let payload = state.last_index_payload().unwrap();
    assert_eq!(
        payload,
        json!({
            "search": "sara",
            "filters": {"classe_id": 2},
            "orderBy": "name",
            "orderByDirection": "asc",
            "perPage": 10,
            "page": 2,
            "paginate": true
        })
    );
}

#[tokio::test]
async fn index_returns_rows_and_meta() {
    let base = common::spawn_mock_api(MockState::with_students(25)).await;
    let api = RemoteApi::new(base);

    let mut query = QueryState::default();
    query.page = 3;

    let resp = api
        .index("student", &query.to_list_query(), GOOD_TOKEN)
        .await
        .unwrap();

    assert_eq!(resp.data.len(), 5);
    assert_eq!(resp.meta.current_page, 3);
    assert_eq!(resp.meta.last_page, 3);
    assert_eq!(resp.meta.total, 25);
    assert_eq!(resp.meta.range_label(), "21 to 25 of 25");
    assert_eq!(resp.data[0].id(), "21");
}

#[tokio::test]
async fn index_rejects_a_bad_token() {
    let base = common::spawn_mock_api(MockState::with_students(3)).await;
    let api = RemoteApi::new(base);

    let query = QueryState::default();
    let err = api
        .index("student", &query.to_list_query(), "stale-token")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Unauthenticated.");
}

#[tokio::test]
async fn options_resolve_known_and_unknown_sources() {
    let base = common::spawn_mock_api(MockState::default()).await;
    let api = RemoteApi::new(base);

    let classes = api.options("classes", GOOD_TOKEN).await.unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].value_key(), "1");
    assert_eq!(classes[0].label, "Grade 1 - A");

    // An unknown source is an empty list, not an error: pickers render
    // empty rather than breaking the form.
    let unknown = api.options("semesters", GOOD_TOKEN).await.unwrap();
    assert!(unknown.is_empty());
}
