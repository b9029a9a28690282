use super::*;

/// Tests inserting a flight.
///
/// Verifies the stored BSON layout: `_id`, `flightCode` and camelCase passenger
/// fields with the category stored as its label.
///
/// Expected: Ok(Flight), raw document matches the layout
#[tokio::test]
async fn inserts_flight_document() -> Result<(), TestError> {
    let Some(test) = TestBuilder::new().build().await? else {
        return Ok(());
    };
    let repo = repository(&test);

    let flight = repo
        .insert(params("AB123", vec![passenger(1, 34, FlightCategory::Gold)]))
        .await?;

    let raw = test
        .collection::<Document>(COLLECTION_NAME)
        .find_one(doc! { "_id": flight.id })
        .await?
        .expect("document should exist");

    assert_eq!(raw.get_str("flightCode").unwrap(), "AB123");
    let passengers = raw.get_array("passengers").unwrap();
    assert_eq!(passengers.len(), 1);
    let first = passengers[0].as_document().unwrap();
    assert_eq!(first.get_str("flightCategory").unwrap(), "Gold");
    assert_eq!(first.get_str("reservationId").unwrap(), "R1");
    assert!(first.get_bool("hasCheckedBaggage").unwrap());

    test.teardown().await
}
