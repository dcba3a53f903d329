//! Authentication primitives.
//!
//! Paddock does not issue credentials to end users itself; an upstream
//! identity service signs access tokens with the shared `JWT_SECRET`. The
//! [`jwt`] module verifies them and can mint tokens for operators and tests.

pub mod jwt;
