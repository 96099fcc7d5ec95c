//! SeaORM entities for the camp roster schema.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
