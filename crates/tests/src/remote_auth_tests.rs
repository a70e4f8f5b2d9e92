use crate::common::{self, MockState, GOOD_TOKEN};
use pretty_assertions::assert_eq;
use server::remote::RemoteApi;
use shared_types::AppErrorKind;

#[tokio::test]
async fn login_returns_token_and_user() {
    let base = common::spawn_mock_api(MockState::default()).await;
    let api = RemoteApi::new(base);

    let resp = api
        .login("director@school.example", "secret")
        .await
        .unwrap();
    assert_eq!(resp.token, GOOD_TOKEN);
    assert_eq!(resp.user.role, "director");
    assert_eq!(resp.user.name, "Amina");
}

#[tokio::test]
async fn login_with_bad_credentials_surfaces_field_errors() {
    let base = common::spawn_mock_api(MockState::default()).await;
    let api = RemoteApi::new(base);

    let err = api
        .login("director@school.example", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
}

#[tokio::test]
async fn me_resolves_the_session_token() {
    let base = common::spawn_mock_api(MockState::default()).await;
    let api = RemoteApi::new(base);

    let user = api.me(GOOD_TOKEN).await.unwrap();
    assert_eq!(user.email, "director@school.example");

    let err = api.me("revoked").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn unreachable_api_maps_to_its_own_error_kind() {
    // Port 1 is never listening.
    let api = RemoteApi::new("http://127.0.0.1:1/api");
    let err = api.me(GOOD_TOKEN).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ApiUnreachable);
}
