use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;

use super::Error;
use crate::{database, schema, types::Error as ErrorType};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::MalformedRequest => StatusCode::BAD_REQUEST,
            ErrorType::NotFound(..) => StatusCode::NOT_FOUND,
            ErrorType::InvalidFormBody(..) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(&self.error_type)
    }
}

impl From<Report<database::Error>> for Error {
    fn from(value: Report<database::Error>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<validator::ValidateError> for Error {
    fn from(value: validator::ValidateError) -> Self {
        #[derive(Debug, thiserror::Error)]
        #[error("Validation error occurred")]
        struct ValidateError;

        Error::from_context(ErrorType::InvalidFormBody(value), ValidateError)
    }
}

impl From<schema::WriteError> for Error {
    fn from(value: schema::WriteError) -> Self {
        match value {
            schema::WriteError::Invalid(error) => error.into(),
            schema::WriteError::Database(report) => report.into(),
        }
    }
}
