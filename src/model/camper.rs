use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::activity::ActivityDto;

/// A camper without its signups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// A camper together with every activity it is signed up for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperWithSignupsDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    #[serde(rename = "signup")]
    pub signups: Vec<CamperSignupDto>,
}

/// A signup as seen from its camper: embeds the activity, not the camper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperSignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub activity: ActivityDto,
}

/// Body of a camper creation.
///
/// Fields are kept as raw JSON so a value of the wrong type reaches validation instead of
/// failing deserialization. A missing field reads as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCamperDto {
    #[serde(default)]
    #[schema(value_type = String)]
    pub name: Value,
    #[serde(default)]
    #[schema(value_type = i64)]
    pub age: Value,
}

/// Fields a camper may be patched with. Any other key in the body is ignored.
///
/// An absent key is `None`; a key present with `null` is `Some(Value::Null)` and fails
/// validation like any other value of the wrong type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCamperDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
