//! Hostel Server
//!
//! Main application entry point

use tokio::net::TcpListener;
use tracing::info;

use hostel_server::{
    config::Settings,
    create_router,
    database::{create_pool, run_migrations, DatabaseService},
    utils::logging,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file appender on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", hostel_server::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;
    run_migrations(&db_pool).await?;

    let state = AppState::new(DatabaseService::new(db_pool.clone()));
    let app = create_router(state);

    let addr = settings.server.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    info!("Hostel server has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
