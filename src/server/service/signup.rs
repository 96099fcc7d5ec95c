use sea_orm::DatabaseConnection;

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::AppError,
    model::signup::{CreateSignupParam, SignupWithRelations},
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a camper up for an activity.
    ///
    /// Both referenced records are looked up before insert so a missing one is reported
    /// as not found rather than as a foreign key failure.
    ///
    /// # Returns
    /// - `Ok(SignupWithRelations)` - The created signup with its camper and activity
    /// - `Err(AppError::NotFound)` - The camper or the activity does not exist
    pub async fn create(&self, param: CreateSignupParam) -> Result<SignupWithRelations, AppError> {
        let camper = CamperRepository::new(self.db)
            .find_by_id(param.camper_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Camper not found".to_string()))?;

        let activity = ActivityRepository::new(self.db)
            .find_by_id(param.activity_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        let signup = SignupRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Signed camper {} up for activity {} at {}:00",
            camper.id,
            activity.id,
            signup.time
        );

        Ok(SignupWithRelations {
            signup,
            camper,
            activity,
        })
    }
}
