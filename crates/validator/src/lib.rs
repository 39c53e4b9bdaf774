#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub use error::*;

/// Types that can check their own field constraints before they
/// are allowed anywhere near the database.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}

impl<T: Validate> Validate for &T {
    fn validate(&self) -> Result<(), ValidateError> {
        T::validate(self)
    }
}
