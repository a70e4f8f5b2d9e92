use crate::common::{self, MockState, GOOD_TOKEN};
use pretty_assertions::assert_eq;
use serde_json::json;
use server::remote::RemoteApi;
use shared_types::AppErrorKind;

#[tokio::test]
async fn create_appends_a_row() {
    let state = MockState::with_students(2);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    let row = api
        .create("student", &json!({"name": "Huda", "active": true}), GOOD_TOKEN)
        .await
        .unwrap();

    assert_eq!(row.id(), "3");
    assert_eq!(row.display("name"), "Huda");
    assert_eq!(state.row_count(), 3);
}

#[tokio::test]
async fn failed_create_leaves_existing_rows_untouched() {
    let state = MockState::with_students(2);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    state.set_fail_mutations(true);
    let err = api
        .create("student", &json!({"name": ""}), GOOD_TOKEN)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("name").map(String::as_str),
        Some("The name field is required.")
    );
    // Toasts show the server message with field errors appended.
    assert_eq!(
        err.toast_message(),
        "The given data was invalid. The name field is required."
    );
    // No partial write: the list the table refetches is unchanged.
    assert_eq!(state.row_count(), 2);
}

#[tokio::test]
async fn update_modifies_the_row_in_place() {
    let state = MockState::with_students(2);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    let row = api
        .update("student", "2", &json!({"name": "Renamed"}), GOOD_TOKEN)
        .await
        .unwrap();

    assert_eq!(row.id(), "2");
    assert_eq!(row.display("name"), "Renamed");
    assert_eq!(state.row_count(), 2);
}

#[tokio::test]
async fn update_of_a_missing_row_is_not_found() {
    let base = common::spawn_mock_api(MockState::with_students(1)).await;
    let api = RemoteApi::new(base);

    let err = api
        .update("student", "99", &json!({"name": "x"}), GOOD_TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn delete_removes_one_row() {
    let state = MockState::with_students(3);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    api.delete("student", "2", GOOD_TOKEN).await.unwrap();
    assert_eq!(state.row_count(), 2);
}

#[tokio::test]
async fn delete_many_removes_the_batch() {
    let state = MockState::with_students(5);
    let base = common::spawn_mock_api(state.clone()).await;
    let api = RemoteApi::new(base);

    api.delete_many(
        "student",
        &["1".to_string(), "3".to_string(), "5".to_string()],
        GOOD_TOKEN,
    )
    .await
    .unwrap();

    assert_eq!(state.row_count(), 2);
}

#[tokio::test]
async fn invalid_entity_name_never_reaches_the_network() {
    let api = RemoteApi::new("http://127.0.0.1:1/api");
    let err = api
        .delete("student/../admin", "1", GOOD_TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
