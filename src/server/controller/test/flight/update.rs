use super::*;

/// Tests replacing a flight and reading it back.
///
/// Expected: 200 and a GET result matching the replacement, not the original
#[tokio::test]
async fn update_replaces_document() {
    let app = app();
    let id = create(
        &app,
        FlightFactory::new()
            .flight_code("ORIG")
            .passengers([PassengerFactory::new(), PassengerFactory::new()])
            .build(),
    )
    .await;

    let replacement = FlightFactory::new()
        .flight_code("REPL")
        .passenger(PassengerFactory::new().id(9).name("Zed").category("Platinum"))
        .build();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/flights/{}", id),
        Some(replacement.clone()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["flightCode"], "REPL");
    assert_eq!(updated["passengers"], replacement["passengers"]);

    let (status, fetched) = send(&app, Method::GET, &format!("/flights/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_of_absent_or_malformed_id_is_not_found() {
    let app = app();

    for uri in [format!("/flights/{}", ABSENT_ID), "/flights/nope".to_string()] {
        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(factory::create_flight_payload()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Flight not found");
    }
}

/// Tests an update with an invalid body on an existing flight.
///
/// Expected: 422, and the stored flight is unchanged
#[tokio::test]
async fn update_with_invalid_body_keeps_original() {
    let app = app();
    let id = create(&app, FlightFactory::new().flight_code("KEEP").build()).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/flights/{}", id),
        Some(json!({ "flightCode": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = send(&app, Method::GET, &format!("/flights/{}", id), None).await;
    assert_eq!(fetched["flightCode"], "KEEP");
}
