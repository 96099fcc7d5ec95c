use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::camper::CamperDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityWithSignupsDto {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
    #[serde(rename = "signup")]
    pub signups: Vec<ActivitySignupDto>,
}

/// A signup as seen from its activity: embeds the camper, not the activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: CamperDto,
}
