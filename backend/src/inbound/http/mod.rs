//! HTTP inbound adapter exposing the JSON endpoints and the public pages.

use actix_web::web;

pub mod accounts;
pub mod error;
pub mod health;
pub mod orders;
pub mod pages;
pub mod response;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

/// Register the JSON endpoints and their extractor configuration.
///
/// Handlers expect `web::Data<state::HttpState>` in app data.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .service(accounts::signup)
        .service(accounts::signin)
        .service(accounts::update_profile)
        .service(orders::place_order);
}
