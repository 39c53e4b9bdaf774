use serde::ser::SerializeMap;
use serde::Serialize;
use std::fmt::Display;
use validator::ValidateError;

/// Client-facing error taxonomy. The serialized shape is part of the
/// API contract: always a JSON object with an `error` message, plus
/// a `fields` map for validation failures.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Internal,
    MalformedRequest,
    NotFound(Resource),
    InvalidFormBody(ValidateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Authors have no by-id route, so no handler returns this today;
    /// the variant keeps the taxonomy complete.
    Author,
    Post,
}

impl Resource {
    #[must_use]
    pub const fn not_found_message(self) -> &'static str {
        match self {
            Resource::Author => "Author not found",
            Resource::Post => "Post not found",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal => f.write_str("Failed to perform request"),
            Error::MalformedRequest => f.write_str("User performed request with malformed body"),
            Error::NotFound(resource) => write!(f, "{resource:?} does not exist"),
            Error::InvalidFormBody(..) => f.write_str("User performed request with invalid body"),
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Error::Internal => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", "Internal server error")?;
                map.end()
            }
            Error::MalformedRequest => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", "Malformed request body")?;
                map.end()
            }
            Error::NotFound(resource) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", resource.not_found_message())?;
                map.end()
            }
            Error::InvalidFormBody(fields) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", "Validation failed")?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
        }
    }
}
