//! Signup domain models, creation parameters and time validation.
//!
//! A signup is rendered differently depending on which side of the relationship it is
//! reached from. `CamperSignup` embeds only the activity, `ActivitySignup` only the camper,
//! and `SignupWithRelations` both, with neither embedding its own signups.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::{
    model::{
        activity::ActivitySignupDto,
        camper::CamperSignupDto,
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::validation::ValidationError,
        model::{
            activity::Activity,
            camper::{integer_from_json, Camper},
        },
    },
};

/// Hours of the day a signup may be scheduled at.
pub const TIME_RANGE: RangeInclusive<i64> = 0..=23;

/// Validates a signup time.
///
/// # Returns
/// - `Ok(i32)` - The hour narrowed to its stored width
/// - `Err(ValidationError::TimeOutOfRange)` - The hour lies outside 0 through 23
pub fn validate_time(time: i64) -> Result<i32, ValidationError> {
    if !TIME_RANGE.contains(&time) {
        return Err(ValidationError::TimeOutOfRange(time));
    }

    Ok(time as i32)
}

/// Reads a signup time from a JSON value. Only JSON integers are accepted.
///
/// The range is not checked here; see `validate_time`.
pub fn time_from_json(value: &Value) -> Result<i64, ValidationError> {
    integer_from_json(value).ok_or_else(|| ValidationError::TimeNotInteger(value.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl Signup {
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
        }
    }
}

/// A signup reached from its camper.
#[derive(Debug, Clone, PartialEq)]
pub struct CamperSignup {
    pub signup: Signup,
    pub activity: Activity,
}

impl CamperSignup {
    pub fn into_dto(self) -> CamperSignupDto {
        CamperSignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            activity: self.activity.into_dto(),
        }
    }
}

/// A signup reached from its activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySignup {
    pub signup: Signup,
    pub camper: Camper,
}

impl ActivitySignup {
    pub fn into_dto(self) -> ActivitySignupDto {
        ActivitySignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            camper: self.camper.into_dto(),
        }
    }
}

/// A signup with both of the records it links.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupWithRelations {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

impl SignupWithRelations {
    pub fn into_dto(self) -> SignupDto {
        SignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            camper: self.camper.into_dto(),
            activity: self.activity.into_dto(),
        }
    }
}

/// Parameters for creating a new signup.
///
/// The time is validated on construction. Whether the camper and activity exist is
/// checked by the service before insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSignupParam {
    pub camper_id: i32,
    pub activity_id: i32,
    time: i32,
}

impl CreateSignupParam {
    pub fn new(camper_id: i32, activity_id: i32, time: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            camper_id,
            activity_id,
            time: validate_time(time)?,
        })
    }

    pub fn time(&self) -> i32 {
        self.time
    }
}

impl TryFrom<CreateSignupDto> for CreateSignupParam {
    type Error = ValidationError;

    fn try_from(dto: CreateSignupDto) -> Result<Self, Self::Error> {
        let time = time_from_json(&dto.time)?;

        Self::new(dto.camper_id, dto.activity_id, time)
    }
}
