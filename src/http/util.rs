use actix_web::error::{JsonPayloadError, PathError};
use actix_web::HttpRequest;
use thiserror::Error;

use super::Error as HttpError;
use crate::types::Error as ErrorType;

#[derive(Debug, Error)]
#[error("{0}")]
struct MalformedBody(String);

#[derive(Debug, Error)]
#[error("{0}")]
struct MalformedPath(String);

/// Bodies that never deserialize (invalid JSON, missing required
/// keys, wrong types) are a 400, not a 500.
pub fn handle_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    HttpError::from_context(ErrorType::MalformedRequest, MalformedBody(err.to_string())).into()
}

pub fn handle_path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    HttpError::from_context(ErrorType::MalformedRequest, MalformedPath(err.to_string())).into()
}
