use super::*;

/// Tests creating a flight and reading it back.
///
/// Verifies that the response is the input plus a string `id`, and that GET by
/// that `id` returns the same document.
///
/// Expected: 200 on both requests with matching bodies
#[tokio::test]
async fn created_flight_round_trips() {
    let app = app();
    let payload = json!({
        "flightCode": "AB123",
        "passengers": [{
            "id": 1,
            "name": "Ann",
            "hasConnections": false,
            "age": 34,
            "flightCategory": "Gold",
            "reservationId": "R1",
            "hasCheckedBaggage": true
        }]
    });

    let (status, created) = send(&app, Method::POST, "/flights", Some(payload.clone())).await;

    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(created.get("_id").is_none());
    assert_eq!(created["flightCode"], payload["flightCode"]);
    assert_eq!(created["passengers"], payload["passengers"]);

    let (status, fetched) = send(&app, Method::GET, &format!("/flights/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

/// Tests listing flights.
///
/// Expected: 200 with every created flight, each carrying an `id`
#[tokio::test]
async fn lists_created_flights() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/flights", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let first = create(&app, factory::create_flight_payload()).await;
    let second = create(&app, factory::create_flight_payload()).await;

    let (status, body) = send(&app, Method::GET, "/flights", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

/// Tests a payload with a category outside the four known tiers.
///
/// Expected: 422 with a `detail` message
#[tokio::test]
async fn rejects_unknown_category() {
    let app = app();
    let payload = FlightFactory::new()
        .passenger(PassengerFactory::new().category("Diamond"))
        .build();

    let (status, body) = send(&app, Method::POST, "/flights", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

/// Tests a payload missing a required field.
///
/// Expected: 422
#[tokio::test]
async fn rejects_missing_flight_code() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/flights",
        Some(json!({ "passengers": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests a body that is not JSON at all.
///
/// Expected: 422, and nothing is stored
#[tokio::test]
async fn rejects_malformed_json() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/flights")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, Method::GET, "/flights", None).await;
    assert_eq!(body, json!([]));
}
