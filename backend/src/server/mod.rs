//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use products_backend::Trace;
#[cfg(debug_assertions)]
use products_backend::doc::ApiDoc;
use products_backend::domain::ports::ProductRepository;
use products_backend::domain::{ErrorExposure, ProductService};
use products_backend::inbound::http::api_scope;
use products_backend::inbound::http::health::{HealthState, live, ready};
use products_backend::inbound::http::state::HttpState;
use products_backend::outbound::memory::InMemoryProductRepository;
use products_backend::outbound::persistence::{DbPool, DieselProductRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

fn state_for<R>(repo: R, exposure: ErrorExposure) -> web::Data<HttpState>
where
    R: ProductRepository + 'static,
{
    let service = Arc::new(ProductService::new(Arc::new(repo), exposure));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// Select the Diesel repository when a pool is configured, otherwise keep
/// products in process memory.
fn build_http_state(db_pool: Option<DbPool>, exposure: ErrorExposure) -> web::Data<HttpState> {
    match db_pool {
        Some(pool) => {
            info!("using PostgreSQL product repository");
            state_for(DieselProductRepository::new(pool), exposure)
        }
        None => {
            info!("using in-memory product repository");
            state_for(InMemoryProductRepository::new(), exposure)
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server.
///
/// Signal handling is left to [`shutdown_on`]; a graceful stop drains
/// in-flight requests for up to 30 seconds.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        exposure,
        db_pool,
    } = config;
    let http_state = build_http_state(db_pool, exposure);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
        .disable_signals()
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, fail the liveness probe, then stop the server
/// gracefully.
pub async fn shutdown_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    signal.await;
    info!("shutdown requested");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Resolves on SIGINT, or on SIGTERM where the platform has it.
pub async fn termination_signal() {
    let interrupt = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
}
