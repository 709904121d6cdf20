//! Actix mapping for the domain error type.
//!
//! The domain stays framework-free; this module gives [`Error`] its HTTP
//! meaning: a status code for each variant plus the JSON body and trace
//! header on the wire.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body actually sent to the client.
///
/// Internal failures are reduced to a fixed message; the underlying detail
/// has already been logged where the error was raised.
fn wire_form(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => {
            let redacted = Error::internal("Internal server error");
            match error.trace_id() {
                Some(id) => redacted.with_trace_id(id.to_owned()),
                None => redacted,
            }
        }
        ErrorCode::InvalidRequest | ErrorCode::NotFound => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(wire_form(self))
    }
}
