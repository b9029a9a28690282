use super::*;

/// Tests replacing a flight's contents.
///
/// Expected: Ok(Some(Flight)) with the new contents and the original identifier
#[tokio::test]
async fn replaces_flight_contents() -> Result<(), TestError> {
    let Some(test) = TestBuilder::new().build().await? else {
        return Ok(());
    };
    let repo = repository(&test);

    let inserted = repo
        .insert(params(
            "OLD",
            vec![
                passenger(1, 20, FlightCategory::Black),
                passenger(2, 30, FlightCategory::Black),
            ],
        ))
        .await?;

    let replaced = repo
        .replace(
            inserted.id,
            params("NEW", vec![passenger(3, 50, FlightCategory::Gold)]),
        )
        .await?
        .expect("flight should exist");

    assert_eq!(replaced.id, inserted.id);
    assert_eq!(replaced.flight_code, "NEW");
    assert_eq!(replaced.passengers, vec![passenger(3, 50, FlightCategory::Gold)]);

    assert_eq!(repo.find_by_id(inserted.id).await?, Some(replaced));
    assert_eq!(repo.find_all().await?.len(), 1);

    test.teardown().await
}

/// Tests replacing an identifier that is not stored.
///
/// Expected: Ok(None), and no document is created
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), TestError> {
    let Some(test) = TestBuilder::new().build().await? else {
        return Ok(());
    };
    let repo = repository(&test);

    let result = repo.replace(ObjectId::new(), params("GHOST", vec![])).await?;

    assert_eq!(result, None);
    assert!(repo.find_all().await?.is_empty());

    test.teardown().await
}
