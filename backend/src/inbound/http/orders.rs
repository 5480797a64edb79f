//! Order placement handler.
//!
//! ```text
//! POST /order {"matricNumber":"CSC/2019/001","foods":["rice","beans"]}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Error, NewOrder, OrderValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response::Envelope;
use crate::inbound::http::state::HttpState;

pub(crate) const ORDER_FAILED: &str = "Order placement failed";

/// Order request body for `POST /order`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(alias = "matric_number")]
    pub matric_number: String,
    pub foods: Vec<String>,
}

impl TryFrom<PlaceOrderRequest> for NewOrder {
    type Error = OrderValidationError;

    fn try_from(value: PlaceOrderRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.matric_number, value.foods)
    }
}

fn map_order_validation_error(err: OrderValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Store an order and notify the canteen in the background.
///
/// The response does not wait for, or depend on, the notification.
#[post("/order")]
pub async fn place_order(
    state: web::Data<HttpState>,
    payload: web::Json<PlaceOrderRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let order = NewOrder::try_from(payload.into_inner())
        .map_err(map_order_validation_error)?;
    let matric_number = order.matric_number.clone();
    let items = order.foods.items().len();

    match state.orders.place_order(order).await {
        Ok(()) => {
            info!(%matric_number, items, "order placed");
            Ok(web::Json(Envelope::ok()))
        }
        Err(err) => {
            warn!(%matric_number, code = ?err.code(), error = %err, "order placement failed");
            Ok(web::Json(Envelope::failure_message(ORDER_FAILED)))
        }
    }
}
