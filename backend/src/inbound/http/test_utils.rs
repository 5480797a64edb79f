//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{MockAccountCommand, MockOrderCommand};

use super::api_services;
use super::state::HttpState;

/// Status and decoded JSON body of a test call.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Build state from optional mocks; a missing mock rejects every call.
pub fn state_with(
    accounts: Option<MockAccountCommand>,
    orders: Option<MockOrderCommand>,
) -> HttpState {
    HttpState::new(
        Arc::new(accounts.unwrap_or_default()),
        Arc::new(orders.unwrap_or_default()),
    )
}

/// POST `payload` to `uri` against the JSON API wired with `state`.
pub async fn post_json(state: HttpState, uri: &str, payload: Value) -> TestResponse {
    post_raw(state, uri, payload.to_string()).await
}

/// POST a raw `application/json` body.
pub async fn post_raw(state: HttpState, uri: &str, body: impl Into<String>) -> TestResponse {
    let app = actix_test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(state))
            .configure(api_services),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.into())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, body }
}
