use error_stack::{Context, Report};
use tracing_error::SpanTrace;

use crate::types;

mod impls;

pub type Result<T> = std::result::Result<T, Error>;

/// Every report is folded into this one context so errors of any
/// origin can travel through a single [`Error`] value; the client
/// visible classification lives in `error_type`.
#[derive(Debug, thiserror::Error)]
#[error("failed to handle request")]
struct RequestFailed;

/// Request-boundary error: a serializable [`types::Error`] deciding the
/// response, plus the full report and span trace for the logs.
pub struct Error {
    error_type: types::Error,
    report: Report<RequestFailed>,
    trace: SpanTrace,
}

impl Error {
    #[must_use]
    pub fn from_context(error_type: types::Error, context: impl Context) -> Self {
        Self {
            error_type,
            report: Report::new(context).change_context(RequestFailed),
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn from_report(error_type: types::Error, report: Report<impl Context>) -> Self {
        Self {
            error_type,
            report: report.change_context(RequestFailed),
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn not_found(resource: types::Resource) -> Self {
        #[derive(Debug, thiserror::Error)]
        #[error("resource not found")]
        struct NotFound;

        Self::from_context(types::Error::NotFound(resource), NotFound)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("type", &self.error_type)
            .field("report", &self.report)
            .field("trace", &self.trace)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{:?}", self.report)?;
        std::fmt::Display::fmt(&self.trace, f)
    }
}
