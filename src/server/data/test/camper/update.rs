use super::*;

/// Tests updating a camper's age only.
///
/// Verifies that applying a patch with just an age leaves the name untouched
/// once written back.
///
/// Expected: Ok with age changed and name preserved
#[tokio::test]
async fn updates_age_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::CamperFactory::new(db)
        .name("Ana")
        .age(12)
        .build()
        .await?;

    let repo = CamperRepository::new(db);
    let mut camper = repo.find_by_id(created.id).await?.unwrap();
    camper
        .apply(UpdateCamperParam {
            name: None,
            age: Some(15),
        })
        .unwrap();
    let updated = repo.update(camper).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.age, 15);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.age, 15);

    Ok(())
}

/// Tests updating a camper that was removed after being loaded.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_deleted_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_camper(db).await?;

    let repo = CamperRepository::new(db);
    let camper = repo.find_by_id(created.id).await?.unwrap();
    entity::prelude::Camper::delete_by_id(created.id)
        .exec(db)
        .await?;

    let result = repo.update(camper).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests that deleting a camper cascades to its signups through the foreign key.
///
/// Expected: Ok with no signups left for the camper
#[tokio::test]
async fn deleting_camper_cascades_to_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, _activity, _signup) =
        factory::helpers::create_signup_with_dependencies(db).await?;

    entity::prelude::Camper::delete_by_id(camper.id)
        .exec(db)
        .await?;

    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}
