//! Well-known role name constants.
//!
//! These must match the `role` claim written by the auth provider.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
