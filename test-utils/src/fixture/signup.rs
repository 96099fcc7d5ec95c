//! Signup fixtures for creating in-memory test data.

use entity::signup;

/// Default hour of the day for test signups.
pub const DEFAULT_TIME: i32 = 9;

/// Creates a signup entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - time: `9`
/// - camper_id: `1`
/// - activity_id: `1`
pub fn entity() -> signup::Model {
    signup::Model {
        id: 1,
        time: DEFAULT_TIME,
        camper_id: 1,
        activity_id: 1,
    }
}

/// Creates a signup entity builder for customization.
pub fn entity_builder() -> SignupEntityBuilder {
    SignupEntityBuilder::default()
}

/// Builder for creating customized signup entity models.
pub struct SignupEntityBuilder {
    id: i32,
    time: i32,
    camper_id: i32,
    activity_id: i32,
}

impl Default for SignupEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            time: DEFAULT_TIME,
            camper_id: 1,
            activity_id: 1,
        }
    }
}

impl SignupEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn time(mut self, time: i32) -> Self {
        self.time = time;
        self
    }

    pub fn camper_id(mut self, camper_id: i32) -> Self {
        self.camper_id = camper_id;
        self
    }

    pub fn activity_id(mut self, activity_id: i32) -> Self {
        self.activity_id = activity_id;
        self
    }

    pub fn build(self) -> signup::Model {
        signup::Model {
            id: self.id,
            time: self.time,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
        }
    }
}
