//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod generated_code_repo;
pub mod generated_content_repo;
pub mod generated_image_repo;
pub mod user_repo;

pub use generated_code_repo::GeneratedCodeRepo;
pub use generated_content_repo::GeneratedContentRepo;
pub use generated_image_repo::GeneratedImageRepo;
pub use user_repo::UserRepo;
