//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity has
//! its own factory module with a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let camper = factory::create_camper(&db).await?;
//! let activity = factory::create_activity(&db).await?;
//! let signup = factory::create_signup(&db, camper.id, activity.id).await?;
//!
//! // Or everything at once
//! let (camper, activity, signup) = factory::helpers::create_signup_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let camper = factory::camper::CamperFactory::new(&db)
//!     .name("Ana")
//!     .age(12)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod camper;
pub mod helpers;
pub mod signup;

pub use activity::create_activity;
pub use camper::create_camper;
pub use signup::create_signup;
