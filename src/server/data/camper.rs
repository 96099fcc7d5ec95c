//! Camper data repository for database operations.
//!
//! Handles creation, lookup and update of camper records, and loads each camper's
//! signups together with the activities they point to.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    activity::Activity,
    camper::{Camper, CamperWithSignups, CreateCamperParam},
    signup::{CamperSignup, Signup},
};

/// Repository providing database operations for camper management.
pub struct CamperRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperRepository<'a> {
    /// Creates a new CamperRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new camper.
    ///
    /// # Arguments
    /// - `param` - Validated name and age
    ///
    /// # Returns
    /// - `Ok(Camper)` - The created camper with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateCamperParam) -> Result<Camper, DbErr> {
        let (name, age) = param.into_parts();

        let entity = entity::camper::ActiveModel {
            name: ActiveValue::Set(name),
            age: ActiveValue::Set(age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camper::from_entity(entity))
    }

    /// Finds a camper by ID without loading its signups.
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The camper exists
    /// - `Ok(None)` - No camper with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camper>, DbErr> {
        let entity = entity::prelude::Camper::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Camper::from_entity))
    }

    /// Finds a camper by ID together with its signups and their activities.
    ///
    /// # Returns
    /// - `Ok(Some(CamperWithSignups))` - The camper exists
    /// - `Ok(None)` - No camper with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_signups(&self, id: i32) -> Result<Option<CamperWithSignups>, DbErr> {
        let rows = entity::prelude::Camper::find_by_id(id)
            .find_with_related(entity::prelude::Signup)
            .all(self.db)
            .await?;

        Ok(self.attach_activities(rows).await?.into_iter().next())
    }

    /// Gets every camper ordered by ID, each with its signups and their activities.
    ///
    /// # Returns
    /// - `Ok(Vec<CamperWithSignups>)` - All campers, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_signups(&self) -> Result<Vec<CamperWithSignups>, DbErr> {
        let rows = entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .find_with_related(entity::prelude::Signup)
            .all(self.db)
            .await?;

        self.attach_activities(rows).await
    }

    /// Writes the camper's name and age. The ID is never written.
    ///
    /// # Returns
    /// - `Ok(Camper)` - The camper as stored after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No camper exists with this ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, camper: Camper) -> Result<Camper, DbErr> {
        let entity = entity::camper::ActiveModel {
            id: ActiveValue::Unchanged(camper.id),
            name: ActiveValue::Set(camper.name),
            age: ActiveValue::Set(camper.age),
        }
        .update(self.db)
        .await?;

        Ok(Camper::from_entity(entity))
    }

    /// Resolves the activity of every loaded signup with a single query.
    async fn attach_activities(
        &self,
        rows: Vec<(entity::camper::Model, Vec<entity::signup::Model>)>,
    ) -> Result<Vec<CamperWithSignups>, DbErr> {
        let activity_ids: Vec<i32> = rows
            .iter()
            .flat_map(|(_, signups)| signups.iter().map(|s| s.activity_id))
            .collect();

        let activities: HashMap<i32, entity::activity::Model> = if activity_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Activity::find()
                .filter(entity::activity::Column::Id.is_in(activity_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        };

        let campers = rows
            .into_iter()
            .map(|(camper, mut signups)| {
                signups.sort_by_key(|s| s.id);

                let signups = signups
                    .into_iter()
                    .filter_map(|signup| {
                        let activity = activities.get(&signup.activity_id)?.clone();
                        Some(CamperSignup {
                            signup: Signup::from_entity(signup),
                            activity: Activity::from_entity(activity),
                        })
                    })
                    .collect();

                CamperWithSignups {
                    camper: Camper::from_entity(camper),
                    signups,
                }
            })
            .collect();

        Ok(campers)
    }
}
