use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository, error::AppError, model::activity::ActivityWithSignups,
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every activity with its signups.
    pub async fn get_all(&self) -> Result<Vec<ActivityWithSignups>, AppError> {
        let activities = ActivityRepository::new(self.db)
            .get_all_with_signups()
            .await?;

        Ok(activities)
    }

    /// Deletes an activity and all of its signups.
    ///
    /// # Returns
    /// - `Ok(())` - Activity and signups deleted
    /// - `Err(AppError::NotFound)` - No activity with this ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let signups = ActivityRepository::new(self.db)
            .delete_with_signups(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        tracing::debug!("Deleted activity {} and {} signup(s)", id, signups);

        Ok(())
    }
}
