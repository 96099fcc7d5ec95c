use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::{activity::ActivityDto, camper::CamperDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: CamperDto,
    pub activity: ActivityDto,
}

/// Body of a signup creation. `time` is kept as raw JSON so its type is checked by
/// validation; a missing `time` reads as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSignupDto {
    pub camper_id: i32,
    pub activity_id: i32,
    #[serde(default)]
    #[schema(value_type = i64)]
    pub time: Value,
}
