use super::*;

/// Tests creating a signup for an existing camper and activity.
///
/// Expected: Ok with signup created
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let signup = SignupRepository::new(db)
        .create(CreateSignupParam::new(camper.id, activity.id, 23).unwrap())
        .await?;

    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);
    assert_eq!(signup.time, 23);
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a signup that references a missing camper.
///
/// Verifies that the foreign key rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParam::new(999, activity.id, 10).unwrap())
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}
