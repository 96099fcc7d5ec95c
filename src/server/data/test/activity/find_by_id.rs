use super::*;

/// Tests finding an existing activity.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .difficulty(3)
        .build()
        .await?;

    let activity = ActivityRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(activity.name, "Archery");
    assert_eq!(activity.difficulty, 3);

    Ok(())
}

/// Tests finding an activity that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = ActivityRepository::new(db).find_by_id(7).await?;

    assert!(activity.is_none());

    Ok(())
}
