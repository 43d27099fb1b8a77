pub mod campaign;
pub mod code;
pub mod content;
pub mod images;
pub mod users;
