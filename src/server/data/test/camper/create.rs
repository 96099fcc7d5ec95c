use super::*;

/// Tests creating a new camper.
///
/// Verifies that the repository stores the validated name and age and returns the
/// camper with its generated ID.
///
/// Expected: Ok with camper created
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo
        .create(CreateCamperParam::new("Ana".to_string(), 12).unwrap())
        .await?;

    assert_eq!(camper.name, "Ana");
    assert_eq!(camper.age, 12);

    let stored = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Ana");
    assert_eq!(stored.age, 12);

    Ok(())
}

/// Tests that consecutive creates receive distinct IDs.
///
/// Expected: Ok with two campers stored
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let first = repo
        .create(CreateCamperParam::new("Ana".to_string(), 12).unwrap())
        .await?;
    let second = repo
        .create(CreateCamperParam::new("Ben".to_string(), 9).unwrap())
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Camper::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a camper when the camper table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db)
        .create(CreateCamperParam::new("Ana".to_string(), 12).unwrap())
        .await;

    assert!(result.is_err());

    Ok(())
}
