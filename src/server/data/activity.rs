//! Activity data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::model::{
    activity::{Activity, ActivityWithSignups},
    camper::Camper,
    signup::{ActivitySignup, Signup},
};

/// Repository providing database operations for activity management.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an activity by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - The activity exists
    /// - `Ok(None)` - No activity with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Gets every activity ordered by ID, each with its signups and their campers.
    ///
    /// # Returns
    /// - `Ok(Vec<ActivityWithSignups>)` - All activities, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_signups(&self) -> Result<Vec<ActivityWithSignups>, DbErr> {
        let rows = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .find_with_related(entity::prelude::Signup)
            .all(self.db)
            .await?;

        let camper_ids: Vec<i32> = rows
            .iter()
            .flat_map(|(_, signups)| signups.iter().map(|s| s.camper_id))
            .collect();

        let campers: HashMap<i32, entity::camper::Model> = if camper_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Camper::find()
                .filter(entity::camper::Column::Id.is_in(camper_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let activities = rows
            .into_iter()
            .map(|(activity, mut signups)| {
                signups.sort_by_key(|s| s.id);

                let signups = signups
                    .into_iter()
                    .filter_map(|signup| {
                        let camper = campers.get(&signup.camper_id)?.clone();
                        Some(ActivitySignup {
                            signup: Signup::from_entity(signup),
                            camper: Camper::from_entity(camper),
                        })
                    })
                    .collect();

                ActivityWithSignups {
                    activity: Activity::from_entity(activity),
                    signups,
                }
            })
            .collect();

        Ok(activities)
    }

    /// Deletes an activity and every signup referencing it in one transaction.
    ///
    /// Signups are removed explicitly rather than relying on the foreign key cascade.
    /// Nothing is written when the activity does not exist.
    ///
    /// # Arguments
    /// - `id` - ID of the activity to delete
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Activity deleted along with `count` signups
    /// - `Ok(None)` - No activity with this ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_with_signups(&self, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(activity) = entity::prelude::Activity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let signups = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(activity.id))
            .exec(&txn)
            .await?;

        entity::prelude::Activity::delete_by_id(activity.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(signups.rows_affected))
    }
}
