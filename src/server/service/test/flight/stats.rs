use super::*;

/// Tests stats for the single-passenger scenario.
///
/// Expected: one Gold passenger, average age 34.0
#[tokio::test]
async fn computes_stats_for_single_passenger() -> Result<(), AppError> {
    let store = InMemoryFlightStore::new();
    let service = FlightService::new(&store);

    let created = service
        .create(params(
            FlightFactory::new()
                .flight_code("AB123")
                .passenger(
                    PassengerFactory::new()
                        .id(1)
                        .name("Ann")
                        .age(34)
                        .category("Gold")
                        .reservation_id("R1")
                        .has_checked_baggage(true),
                )
                .build(),
        ))
        .await?;

    let stats = service
        .get_stats(&created.id.to_hex())
        .await?
        .expect("flight should exist");

    assert_eq!(stats.flight_code, "AB123");
    assert_eq!(stats.total_passengers, 1);
    assert_eq!(stats.average_age, 34.0);
    assert_eq!(stats.category_distribution.gold, 1);
    assert_eq!(stats.category_distribution.total(), 1);

    Ok(())
}

/// Tests stats for a flight without passengers.
///
/// Expected: zero count, zero average, all categories zero
#[tokio::test]
async fn computes_stats_for_empty_flight() -> Result<(), AppError> {
    let store = InMemoryFlightStore::new();
    let service = FlightService::new(&store);

    let created = service
        .create(params(FlightFactory::new().flight_code("EMPTY").build()))
        .await?;

    let stats = service
        .get_stats(&created.id.to_hex())
        .await?
        .expect("flight should exist");

    assert_eq!(stats.total_passengers, 0);
    assert_eq!(stats.average_age, 0.0);
    assert_eq!(stats.category_distribution.total(), 0);

    Ok(())
}

/// Tests that stats reflect the manifest after an update.
///
/// Expected: counts from the replacement passenger list only
#[tokio::test]
async fn stats_follow_updates() -> Result<(), AppError> {
    let store = InMemoryFlightStore::new();
    let service = FlightService::new(&store);

    let created = service
        .create(params(
            FlightFactory::new()
                .passengers([
                    PassengerFactory::new().category("Black"),
                    PassengerFactory::new().category("Black"),
                ])
                .build(),
        ))
        .await?;
    let id = created.id.to_hex();

    service
        .update(
            &id,
            params(
                FlightFactory::new()
                    .passengers([
                        PassengerFactory::new().age(20).category("Platinum"),
                        PassengerFactory::new().age(25).category("Normal"),
                    ])
                    .build(),
            ),
        )
        .await?;

    let stats = service.get_stats(&id).await?.expect("flight should exist");

    assert_eq!(stats.total_passengers, 2);
    assert_eq!(stats.average_age, 22.5);
    assert_eq!(stats.category_distribution.black, 0);
    assert_eq!(stats.category_distribution.platinum, 1);
    assert_eq!(stats.category_distribution.normal, 1);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_ids() -> Result<(), AppError> {
    let store = InMemoryFlightStore::new();
    let service = FlightService::new(&store);

    assert_eq!(service.get_stats(ABSENT_ID).await?, None);
    assert_eq!(service.get_stats("bogus").await?, None);

    Ok(())
}
