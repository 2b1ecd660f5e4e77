//! Domain model layer for the user directory.
//! - Defines the user record and its create/patch input shapes.
//! - Holds the seed dataset the mock backend serves.
//! - Provides form-level validation reused by calling UIs.

pub mod errors;
pub mod seed;
pub mod user;
pub mod validation;
