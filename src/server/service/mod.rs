//! Business logic layer orchestrating repositories.
//!
//! Services perform existence checks, apply validated updates and translate missing records
//! into `AppError::NotFound`. They return domain models which controllers convert to DTOs.

pub mod activity;
pub mod camper;
pub mod signup;
