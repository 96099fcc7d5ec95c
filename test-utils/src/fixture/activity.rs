//! Activity fixtures for creating in-memory test data.

use entity::activity;

/// Default test activity name.
pub const DEFAULT_NAME: &str = "Test Activity";

/// Default test activity difficulty.
pub const DEFAULT_DIFFICULTY: i32 = 2;

/// Creates an activity entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Activity"`
/// - difficulty: `2`
pub fn entity() -> activity::Model {
    activity::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        difficulty: DEFAULT_DIFFICULTY,
    }
}

/// Creates an activity entity builder for customization.
pub fn entity_builder() -> ActivityEntityBuilder {
    ActivityEntityBuilder::default()
}

/// Builder for creating customized activity entity models.
pub struct ActivityEntityBuilder {
    id: i32,
    name: String,
    difficulty: i32,
}

impl Default for ActivityEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl ActivityEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn build(self) -> activity::Model {
        activity::Model {
            id: self.id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}
