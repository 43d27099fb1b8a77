//! Credential handling for stored users.
//!
//! - [`password`] -- Argon2id password hashing and strength validation.

pub mod password;
