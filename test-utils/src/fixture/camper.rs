//! Camper fixtures for creating in-memory test data.

use entity::camper;

/// Default test camper name.
pub const DEFAULT_NAME: &str = "Test Camper";

/// Default test camper age.
pub const DEFAULT_AGE: i32 = 12;

/// Creates a camper entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Camper"`
/// - age: `12`
pub fn entity() -> camper::Model {
    camper::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        age: DEFAULT_AGE,
    }
}

/// Creates a camper entity builder for customization.
pub fn entity_builder() -> CamperEntityBuilder {
    CamperEntityBuilder::default()
}

/// Builder for creating customized camper entity models.
pub struct CamperEntityBuilder {
    id: i32,
    name: String,
    age: i32,
}

impl Default for CamperEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
        }
    }
}

impl CamperEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn build(self) -> camper::Model {
        camper::Model {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }
}
