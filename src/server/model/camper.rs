//! Camper domain model, parameter models and field validation.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::{
    model::camper::{CamperDto, CamperWithSignupsDto, CreateCamperDto, UpdateCamperDto},
    server::{error::validation::ValidationError, model::signup::CamperSignup},
};

/// Ages a camper may have.
pub const AGE_RANGE: RangeInclusive<i64> = 8..=18;

/// Validates a camper name.
///
/// # Returns
/// - `Ok(String)` - The unchanged name
/// - `Err(ValidationError::EmptyName)` - The name is empty
pub fn validate_name(name: String) -> Result<String, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name)
}

/// Validates a camper age.
///
/// # Returns
/// - `Ok(i32)` - The age narrowed to its stored width
/// - `Err(ValidationError::AgeOutOfRange)` - The age lies outside 8 through 18
pub fn validate_age(age: i64) -> Result<i32, ValidationError> {
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }

    Ok(age as i32)
}

/// Reads a camper name from a JSON value and validates it.
///
/// # Returns
/// - `Ok(String)` - The name
/// - `Err(ValidationError::NameNotString)` - The value is not a JSON string
/// - `Err(ValidationError::EmptyName)` - The string is empty
pub fn name_from_json(value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(name) => validate_name(name),
        other => Err(ValidationError::NameNotString(other.to_string())),
    }
}

/// Reads a camper age from a JSON value. Floats, strings and booleans are rejected even
/// when they would convert to a whole number.
///
/// The range is not checked here; see `validate_age`.
pub fn age_from_json(value: &Value) -> Result<i64, ValidationError> {
    integer_from_json(value).ok_or_else(|| ValidationError::AgeNotInteger(value.to_string()))
}

/// Extracts an integer, saturating values beyond `i64` so they fail the range check.
pub(crate) fn integer_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) if number.is_i64() => number.as_i64(),
        Value::Number(number) if number.is_u64() => Some(i64::MAX),
        _ => None,
    }
}

/// The camper domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl Camper {
    /// Converts an entity model to the camper domain model.
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
        }
    }

    /// Converts the camper into its DTO without signups.
    pub fn into_dto(self) -> CamperDto {
        CamperDto {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }

    /// Replaces the name after validating it.
    ///
    /// The camper is left untouched when validation fails.
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Replaces the age after validating it.
    ///
    /// The camper is left untouched when validation fails.
    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = validate_age(age)?;
        Ok(())
    }

    /// Applies every field present in the update through its typed setter.
    ///
    /// Fields are applied in declaration order; on error the camper may hold a partially
    /// applied update and must not be persisted.
    ///
    /// # Returns
    /// - `Ok(())` - All present fields were valid and applied
    /// - `Err(ValidationError)` - The first invalid field
    pub fn apply(&mut self, param: UpdateCamperParam) -> Result<(), ValidationError> {
        if let Some(name) = param.name {
            self.set_name(name)?;
        }
        if let Some(age) = param.age {
            self.set_age(age)?;
        }

        Ok(())
    }
}

/// A camper together with its signups, each carrying the signed-up activity.
#[derive(Debug, Clone, PartialEq)]
pub struct CamperWithSignups {
    pub camper: Camper,
    pub signups: Vec<CamperSignup>,
}

impl CamperWithSignups {
    pub fn into_dto(self) -> CamperWithSignupsDto {
        CamperWithSignupsDto {
            id: self.camper.id,
            name: self.camper.name,
            age: self.camper.age,
            signups: self
                .signups
                .into_iter()
                .map(CamperSignup::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new camper.
///
/// Can only be obtained through `new` (or `TryFrom<CreateCamperDto>`), so every instance
/// holds a valid name and age.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCamperParam {
    name: String,
    age: i32,
}

impl CreateCamperParam {
    pub fn new(name: String, age: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            age: validate_age(age)?,
        })
    }

    pub fn into_parts(self) -> (String, i32) {
        (self.name, self.age)
    }
}

impl TryFrom<CreateCamperDto> for CreateCamperParam {
    type Error = ValidationError;

    fn try_from(dto: CreateCamperDto) -> Result<Self, Self::Error> {
        let name = name_from_json(dto.name)?;
        let age = age_from_json(&dto.age)?;

        Self::new(name, age)
    }
}

/// Allow-listed fields of a camper patch. Absent fields are left unchanged.
///
/// Converting from the DTO only checks JSON types; ranges are checked by the setters in
/// `Camper::apply`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCamperParam {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl TryFrom<UpdateCamperDto> for UpdateCamperParam {
    type Error = ValidationError;

    fn try_from(dto: UpdateCamperDto) -> Result<Self, Self::Error> {
        let name = match dto.name {
            Some(Value::String(name)) => Some(name),
            Some(other) => return Err(ValidationError::NameNotString(other.to_string())),
            None => None,
        };
        let age = dto.age.as_ref().map(age_from_json).transpose()?;

        Ok(Self { name, age })
    }
}
