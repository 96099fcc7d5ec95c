use sea_orm::DatabaseConnection;

use crate::server::{
    data::camper::CamperRepository,
    error::AppError,
    model::camper::{Camper, CamperWithSignups, CreateCamperParam, UpdateCamperParam},
};

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every camper with its signups.
    pub async fn get_all(&self) -> Result<Vec<CamperWithSignups>, AppError> {
        let campers = CamperRepository::new(self.db).get_all_with_signups().await?;

        Ok(campers)
    }

    /// Gets a single camper without its signups.
    ///
    /// # Returns
    /// - `Ok(Camper)` - The camper
    /// - `Err(AppError::NotFound)` - No camper with this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Camper, AppError> {
        CamperRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Camper not found".to_string()))
    }

    /// Creates a camper. A new camper has no signups yet.
    pub async fn create(&self, param: CreateCamperParam) -> Result<CamperWithSignups, AppError> {
        let camper = CamperRepository::new(self.db).create(param).await?;

        tracing::debug!("Created camper {} ({})", camper.id, camper.name);

        Ok(CamperWithSignups {
            camper,
            signups: Vec::new(),
        })
    }

    /// Applies a patch to an existing camper.
    ///
    /// The camper is looked up first, then every present field goes through its validating
    /// setter. Nothing is written unless all fields are valid.
    ///
    /// # Returns
    /// - `Ok(CamperWithSignups)` - The updated camper with its signups
    /// - `Err(AppError::NotFound)` - No camper with this ID
    /// - `Err(AppError::ValidationErr)` - A patched field is invalid
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCamperParam,
    ) -> Result<CamperWithSignups, AppError> {
        let repo = CamperRepository::new(self.db);

        let mut camper = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Camper not found".to_string()))?;

        camper.apply(param)?;
        repo.update(camper).await?;

        tracing::debug!("Updated camper {}", id);

        repo.find_with_signups(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Camper not found".to_string()))
    }
}
