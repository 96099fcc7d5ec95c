use super::*;

/// Tests loading a camper with its signups and their activities.
///
/// Verifies that only the camper's own signups are returned, ordered by ID, each
/// carrying the activity it points to.
///
/// Expected: Ok(Some) with two signups
#[tokio::test]
async fn loads_signups_with_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let other = factory::create_camper(db).await?;
    let archery = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .build()
        .await?;
    let canoe = factory::activity::ActivityFactory::new(db)
        .name("Canoe")
        .build()
        .await?;

    let first = factory::signup::SignupFactory::new(db, camper.id, archery.id)
        .time(9)
        .build()
        .await?;
    let second = factory::signup::SignupFactory::new(db, camper.id, canoe.id)
        .time(14)
        .build()
        .await?;
    factory::create_signup(db, other.id, archery.id).await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(result.camper.id, camper.id);
    assert_eq!(result.signups.len(), 2);
    assert_eq!(result.signups[0].signup.id, first.id);
    assert_eq!(result.signups[0].activity.name, "Archery");
    assert_eq!(result.signups[1].signup.id, second.id);
    assert_eq!(result.signups[1].signup.time, 14);
    assert_eq!(result.signups[1].activity.name, "Canoe");

    Ok(())
}

/// Tests loading a camper without signups.
///
/// Expected: Ok(Some) with empty signups
#[tokio::test]
async fn returns_empty_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert!(result.signups.is_empty());

    Ok(())
}

/// Tests loading a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db).find_with_signups(42).await?;

    assert!(result.is_none());

    Ok(())
}
