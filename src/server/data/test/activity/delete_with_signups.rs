use super::*;

/// Tests deleting an activity with two signups.
///
/// Verifies that the activity and both of its signups are removed while signups for
/// other activities survive.
///
/// Expected: Ok(Some(2))
#[tokio::test]
async fn deletes_activity_and_its_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let other_camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;
    let kept_activity = factory::create_activity(db).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    factory::create_signup(db, other_camper.id, activity.id).await?;
    let kept = factory::create_signup(db, camper.id, kept_activity.id).await?;

    let deleted = ActivityRepository::new(db)
        .delete_with_signups(activity.id)
        .await?;

    assert_eq!(deleted, Some(2));
    assert!(entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?
        .is_none());

    let remaining = entity::prelude::Signup::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting an activity without signups.
///
/// Expected: Ok(Some(0))
#[tokio::test]
async fn deletes_activity_without_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let deleted = ActivityRepository::new(db)
        .delete_with_signups(activity.id)
        .await?;

    assert_eq!(deleted, Some(0));
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an activity that does not exist.
///
/// Verifies that nothing else is touched.
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

    factory::helpers::create_signup_with_dependencies(db).await?;

    let deleted = ActivityRepository::new(db).delete_with_signups(999).await?;

    assert_eq!(deleted, None);
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}
