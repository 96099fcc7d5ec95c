use super::*;

/// Tests listing campers ordered by ID with their signups.
///
/// Expected: Ok with every camper, signups attached to the right owner
#[tokio::test]
async fn lists_campers_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::camper::CamperFactory::new(db)
        .name("Ana")
        .build()
        .await?;
    let ben = factory::camper::CamperFactory::new(db)
        .name("Ben")
        .build()
        .await?;
    let activity = factory::create_activity(db).await?;
    factory::create_signup(db, ben.id, activity.id).await?;

    let campers = CamperRepository::new(db).get_all_with_signups().await?;

    assert_eq!(campers.len(), 2);
    assert_eq!(campers[0].camper.id, ana.id);
    assert!(campers[0].signups.is_empty());
    assert_eq!(campers[1].camper.id, ben.id);
    assert_eq!(campers[1].signups.len(), 1);
    assert_eq!(campers[1].signups[0].activity.id, activity.id);

    Ok(())
}

/// Tests listing when no campers exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campers = CamperRepository::new(db).get_all_with_signups().await?;

    assert!(campers.is_empty());

    Ok(())
}
