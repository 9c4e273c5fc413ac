pub mod catalog;
pub mod error;
pub mod geometry;
pub mod model;

pub use catalog::{APP_TITLE, Catalog};
pub use error::ContentError;
