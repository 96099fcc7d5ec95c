use super::*;

/// Tests listing activities with their signups and campers.
///
/// Expected: Ok with activities in ID order, each signup carrying its camper
#[tokio::test]
async fn lists_activities_with_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let archery = factory::create_activity(db).await?;
    let canoe = factory::create_activity(db).await?;
    let ana = factory::camper::CamperFactory::new(db)
        .name("Ana")
        .build()
        .await?;
    let ben = factory::camper::CamperFactory::new(db)
        .name("Ben")
        .build()
        .await?;
    factory::create_signup(db, ana.id, canoe.id).await?;
    factory::create_signup(db, ben.id, canoe.id).await?;

    let activities = ActivityRepository::new(db).get_all_with_signups().await?;

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].activity.id, archery.id);
    assert!(activities[0].signups.is_empty());
    assert_eq!(activities[1].activity.id, canoe.id);
    assert_eq!(activities[1].signups.len(), 2);
    assert_eq!(activities[1].signups[0].camper.name, "Ana");
    assert_eq!(activities[1].signups[1].camper.name, "Ben");

    Ok(())
}
