//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of conversions and validation where a database round-trip adds nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let camper = fixture::camper::entity();
//! let older = fixture::camper::entity_builder().age(17).build();
//! ```

pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::{entity as activity_entity, entity_builder as activity_entity_builder};
pub use camper::{entity as camper_entity, entity_builder as camper_entity_builder};
pub use signup::{entity as signup_entity, entity_builder as signup_entity_builder};
