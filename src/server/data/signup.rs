//! Signup data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::signup::{CreateSignupParam, Signup};

/// Repository providing database operations for signup management.
pub struct SignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupRepository<'a> {
    /// Creates a new SignupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new signup.
    ///
    /// # Arguments
    /// - `param` - Validated time plus camper and activity IDs
    ///
    /// # Returns
    /// - `Ok(Signup)` - The created signup with generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: CreateSignupParam) -> Result<Signup, DbErr> {
        let entity = entity::signup::ActiveModel {
            time: ActiveValue::Set(param.time()),
            camper_id: ActiveValue::Set(param.camper_id),
            activity_id: ActiveValue::Set(param.activity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(entity))
    }
}
