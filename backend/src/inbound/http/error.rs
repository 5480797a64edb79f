//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into the shared failure envelope with a
//! matching status code.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

use super::response::Envelope;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        "Internal server error"
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        respond(self, Envelope::failure_message(public_message(self)))
    }
}

fn respond(error: &Error, body: Envelope) -> HttpResponse {
    let mut builder = HttpResponse::build(status_for(error.code()));
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder.json(body)
}

/// Render `error` with its reason in the envelope's `error` field, for
/// routes whose failures are reported there.
pub(crate) fn error_field_response(error: &Error) -> HttpResponse {
    respond(error, Envelope::failure_error(public_message(error)))
}

/// Domain error behind a failed extractor configured with [`json_config`].
pub(crate) fn extractor_error(err: &actix_web::Error) -> Error {
    err.as_error::<Error>()
        .cloned()
        .unwrap_or_else(|| Error::invalid_request(err.to_string()))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request(format!("invalid request body: {err}")).into()
}

/// JSON extractor configuration that reports malformed bodies as
/// `invalid_request` failures instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TraceId;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_of(error: &Error) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[case(ErrorCode::Conflict, StatusCode::CONFLICT)]
    #[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_matches_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
        assert_eq!(Error::new(code, "x").status_code(), expected);
    }

    #[actix_web::test]
    async fn validation_errors_use_the_failure_envelope() {
        let body = body_of(&Error::invalid_request("foods must contain at least one item")).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["message"], "foods must contain at least one item");
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let body = body_of(&Error::internal("disk I/O error on users table")).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn error_field_response_moves_the_reason() {
        let response = error_field_response(&Error::invalid_request("bad"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body, serde_json::json!({"success": false, "error": "bad"}));
    }

    #[rstest]
    fn extractor_error_recovers_the_domain_error() {
        let raised = actix_web::Error::from(Error::invalid_request("invalid request body: EOF"));
        let recovered = extractor_error(&raised);
        assert_eq!(recovered.code(), ErrorCode::InvalidRequest);
        assert_eq!(recovered.message(), "invalid request body: EOF");
    }

    #[actix_web::test]
    async fn trace_id_is_echoed_as_header() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
        let response = error.error_response();
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }
}
