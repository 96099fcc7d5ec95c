//! Request and response shapes of the HTTP API.
//!
//! Every nested record embeds its related records one level deep and never the side of
//! the relationship it was reached from, so serialized output cannot cycle.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
