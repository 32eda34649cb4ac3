//! User and reference-code resolution.
//!
//! Users and their reference codes are provisioned externally; this feature
//! only resolves inbound email to an existing account and never mutates
//! either table.

pub mod models;
pub mod services;

pub use services::UserService;
