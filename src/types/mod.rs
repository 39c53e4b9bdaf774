pub mod error;
pub mod form;

pub use error::{Error, Resource};
