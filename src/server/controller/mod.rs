//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, call the matching service and
//! convert the returned domain models back into response DTOs. Every handler carries a
//! `#[utoipa::path]` annotation from which the OpenAPI document is generated.

pub mod activity;
pub mod camper;
pub mod home;
pub mod signup;

#[cfg(test)]
mod test;
