//! JSON rendering of domain errors.
//!
//! Handlers return [`ApiResult`]; Actix turns the `Err` side into a response
//! through [`ResponseError`]. The body is always the serialized [`Error`] and
//! the `trace-id` header repeats the body's `traceId`.
//!
//! | code                  | status |
//! |-----------------------|--------|
//! | `invalid_request`     | 400    |
//! | `not_found`           | 404    |
//! | `conflict`            | 409    |
//! | `service_unavailable` | 503    |
//! | `internal_error`      | 500    |
//!
//! Store and driver messages only ever travel inside `internal_error`, so
//! that is the one code whose message and details are replaced before the
//! body is written. The original is logged against the same trace id.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message clients see in place of any internal error.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// The body actually sent for `error`.
fn client_view(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }
    error!(
        trace_id = err.trace_id().unwrap_or("-"),
        message = err.message(),
        details = ?err.details(),
        "internal error redacted"
    );
    let redacted = Error::internal(REDACTED_MESSAGE);
    match err.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = client_view(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = body.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::TraceId;

    async fn render(err: &Error) -> (StatusCode, Option<String>, Error) {
        let response = err.error_response();
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body: Error = serde_json::from_slice(&bytes).expect("error body");
        (status, header, body)
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("no user 4"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("user 1 still receives mannah"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("syntax error"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn each_code_has_one_status(#[case] err: Error, #[case] status: StatusCode) {
        assert_eq!(err.status_code(), status);
    }

    #[rstest]
    #[case(Error::conflict("mannah references a user that does not exist")
        .with_details(json!({"fromUser": 40, "toUser": 2, "code": "unknown_user"})))]
    #[case(Error::service_unavailable("user repository unavailable: refused"))]
    #[actix_web::test]
    async fn non_internal_errors_are_sent_verbatim(#[case] err: Error) {
        let (_, _, body) = render(&err).await;
        assert_eq!(body, err);
    }

    #[actix_web::test]
    async fn store_messages_never_leave_the_service() {
        let err = Error::internal("user repository error: relation \"users\" does not exist")
            .with_trace_id("4b3f0c52-6a52-4d0e-9d5e-5a4f8ab1f7a1")
            .with_details(json!({"statement": "SELECT"}));

        let (status, header, body) = render(&err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message(), REDACTED_MESSAGE);
        assert!(body.details().is_none());
        assert_eq!(body.trace_id(), Some("4b3f0c52-6a52-4d0e-9d5e-5a4f8ab1f7a1"));
        assert_eq!(header.as_deref(), body.trace_id());
    }

    #[actix_web::test]
    async fn header_follows_the_trace_scope() {
        let trace_id = TraceId::generate();
        let err = TraceId::scope(trace_id, async { Error::not_found("no user 9") }).await;

        let (_, header, body) = render(&err).await;

        assert_eq!(header, Some(trace_id.to_string()));
        assert_eq!(body.trace_id(), header.as_deref());

        let (_, header, _) = render(&Error::not_found("no user 9")).await;
        assert!(header.is_none());
    }
}
