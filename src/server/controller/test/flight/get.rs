use super::*;

/// Tests getting a well-formed but absent identifier.
///
/// Expected: 404 with "Flight not found"
#[tokio::test]
async fn absent_id_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, &format!("/flights/{}", ABSENT_ID), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Flight not found");
}

/// Tests that a malformed identifier is reported as not found, not as a server error.
///
/// Expected: 404 with "Flight not found"
#[tokio::test]
async fn malformed_id_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/flights/not-an-id", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Flight not found");
}
