//! Backend entry-point: loads configuration, connects storage, and serves
//! the product API.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use products_backend::config::BackendSettings;
use products_backend::inbound::http::health::HealthState;
use products_backend::outbound::persistence::{DbPool, PoolConfig, apply_schema};
use server::{ServerConfig, create_server, shutdown_on, termination_signal};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = BackendSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("PRODUCTS_BIND_ADDR must be a host:port socket address")?;

    let mut config = ServerConfig::new(bind_addr, settings.error_exposure());
    match settings.database_url() {
        Some(url) => {
            let pool_config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to connect to the database")?;
            apply_schema(&pool)
                .await
                .wrap_err("failed to prepare the products schema")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("PRODUCTS_DATABASE_URL not set; products are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(shutdown_on(termination_signal(), health_state, server.handle()));
    info!(%bind_addr, production = settings.production, "products backend listening");
    server.await?;
    info!("products backend stopped");
    Ok(())
}
