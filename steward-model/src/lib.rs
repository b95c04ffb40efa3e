//! Core data model definitions shared across Steward crates.
#![allow(missing_docs)]

pub mod error;
pub mod signal;
pub mod user;
pub mod users;

pub use error::{ModelError, Result};
pub use signal::Signal;
pub use user::User;
pub use users::Users;
