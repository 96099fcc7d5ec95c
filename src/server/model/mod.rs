//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from entity models at the data layer boundary and into DTOs
//! at the controller boundary. Parameter types validate their fields on construction.

pub mod activity;
pub mod camper;
pub mod signup;
