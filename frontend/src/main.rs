//! Frontend entry-point: serves catalogue pages backed by the products API.

use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use product_client::ProductClient;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use products_frontend::config::FrontendSettings;
use products_frontend::pages::Pages;
use products_frontend::routes::{FrontendState, configure};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = FrontendSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("FRONTEND_BIND_ADDR must be a host:port socket address")?;
    let client_config = settings
        .client_config()
        .wrap_err("frontend API client settings are not usable")?;
    info!(api = %client_config.base_url(), "using products API");

    let client = ProductClient::new(client_config).wrap_err("failed to build HTTP client")?;
    let pages = Pages::new().wrap_err("failed to compile page templates")?;
    let state = web::Data::new(FrontendState::new(client, pages));

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(bind_addr)?
        .run();
    info!(%bind_addr, "products frontend listening");
    server.await?;
    Ok(())
}
