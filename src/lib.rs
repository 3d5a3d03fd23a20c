// Module declarations
pub mod contact;
pub mod error;
pub mod logging;
pub mod pages;
pub mod projects;
pub mod settings;
pub mod state;
pub mod validation;
pub mod views;

mod middleware;

use std::future::Future;

use axum::{handler::HandlerWithoutStateExt, middleware::from_fn, routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;
use tracing::{error, info};

pub use error::AppError;
pub use settings::Settings;
pub use state::AppState;

/// All routes of the site, wired to the given state.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.settings.assets.static_dir)
        .not_found_service(pages::not_found.into_service());

    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/resume", get(pages::resume))
        .route("/projects", get(projects::handlers::list_projects))
        .route(
            "/projects/new",
            get(projects::handlers::new_project_form).post(projects::handlers::create_project),
        )
        .route("/contact", get(contact::contact_form).post(contact::submit_contact))
        .route("/thankyou", get(pages::thank_you))
        .nest_service("/static", static_files)
        .fallback(pages::not_found)
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Load settings from the environment, set up logging and serve until
/// Ctrl+C or SIGTERM.
pub async fn run() -> Result<(), AppError> {
    let settings = Settings::load()?;
    logging::init(&settings.logging);

    serve(settings, shutdown_signal()).await
}

/// Initialize the store, bind the configured address and serve until
/// `shutdown` resolves.
pub async fn serve<F>(settings: Settings, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = settings.listen_addr()?;

    info!(db_path = %settings.storage.db_path.display(), "Initializing project store...");
    let state = AppState::from_settings(settings).await?;
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind {}: {}", address, e)))?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::ServerError(format!("Server loop failed: {}", e)))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
