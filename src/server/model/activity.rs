//! Activity domain model.

use crate::{
    model::activity::{ActivityDto, ActivityWithSignupsDto},
    server::model::signup::ActivitySignup,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

impl Activity {
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}

/// An activity together with its signups, each carrying the signed-up camper.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityWithSignups {
    pub activity: Activity,
    pub signups: Vec<ActivitySignup>,
}

impl ActivityWithSignups {
    pub fn into_dto(self) -> ActivityWithSignupsDto {
        ActivityWithSignupsDto {
            id: self.activity.id,
            name: self.activity.name,
            difficulty: self.activity.difficulty,
            signups: self
                .signups
                .into_iter()
                .map(ActivitySignup::into_dto)
                .collect(),
        }
    }
}
