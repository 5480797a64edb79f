//! Backend entry-point: prepares the record store, wires the adapters, and
//! serves the JSON API plus the public pages.

mod server;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use campus_food::inbound::http::health::HealthState;
use campus_food::outbound::persistence::{DbPool, ensure_schema};
use campus_food::settings::AppSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, build_http_state, build_notifier, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Load `.env` before the subscriber so `RUST_LOG` may come from it.
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load environment file"),
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("invalid configuration")?;
    let pool_config = settings.pool_config().wrap_err("invalid configuration")?;

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err_with(|| format!("failed to open database at {}", settings.database_path()))?;
    ensure_schema(&pool)
        .await
        .wrap_err("failed to prepare database schema")?;
    info!(path = %settings.database_path(), "connected to database");

    let notifier = build_notifier(&settings).wrap_err("failed to configure email")?;
    let http_state = build_http_state(&pool, notifier);

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::from_settings(&settings);
    let (host, port) = config.bind_addr();
    let server = create_server(health_state.clone(), http_state, config)
        .wrap_err_with(|| format!("failed to bind {host}:{port}"))?;
    info!(%host, port, "server listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    pool.release();
    info!("server stopped");
    outcome.wrap_err("server terminated with an error")
}
