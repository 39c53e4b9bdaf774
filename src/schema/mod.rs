use error_stack::Report;
use validator::ValidateError;

use crate::database;

mod author;
mod post;

pub use author::Author;
pub use post::Post;

/// Failure of a store write: either the candidate values broke a field
/// constraint, or the database itself refused. Converted to an HTTP
/// error at the request boundary.
#[derive(Debug)]
pub enum WriteError {
    Invalid(ValidateError),
    Database(Report<database::Error>),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Invalid(..) => f.write_str("entity failed validation"),
            WriteError::Database(..) => f.write_str("entity write failed"),
        }
    }
}

impl std::error::Error for WriteError {}

impl From<ValidateError> for WriteError {
    fn from(value: ValidateError) -> Self {
        Self::Invalid(value)
    }
}

impl From<Report<database::Error>> for WriteError {
    fn from(value: Report<database::Error>) -> Self {
        Self::Database(value)
    }
}
