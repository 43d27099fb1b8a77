//! Domain core for the Atelier asset service.
//!
//! Pure, I/O-free building blocks shared by the pipeline, storage and HTTP
//! crates: the option lookup tables behind each generator, score clamping,
//! list-limit clamping, input validation and the shared error type.

pub mod code;
pub mod content;
pub mod error;
pub mod image;
pub mod listing;
pub mod quality;
pub mod types;
pub mod validation;
