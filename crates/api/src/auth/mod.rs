//! Credential handling for the login endpoint.

pub mod password;
