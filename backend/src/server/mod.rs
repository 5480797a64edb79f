//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{build_http_state, build_notifier};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use campus_food::Trace;
use campus_food::inbound::http::api_services;
use campus_food::inbound::http::health::{HealthState, live, ready};
use campus_food::inbound::http::pages::{PublicDir, order_page, static_files};
use campus_food::inbound::http::state::HttpState;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    public_dir: PublicDir,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        public_dir,
    } = deps;

    // The static file service matches every path, so it goes last.
    let assets = static_files(&public_dir);
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::Data::new(public_dir))
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(api_services)
        .service(order_page)
        .service(assets)
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let bind_addr = config.bind_addr();
    let ServerConfig { public_dir, .. } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            public_dir: public_dir.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
