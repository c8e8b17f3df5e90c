use anyhow::Context;
use dotenvy::dotenv;
use schoolerp::logging::{init_tracing, log_dir_from_env};
use schoolerp::metrics::{init_metrics, metrics_app};
use schoolerp::router::init_router;
use schoolerp::state::init_app_state;
use schoolerp_config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(log_dir_from_env().as_deref()).context("Failed to create log directory")?;

    let metrics_handle = init_metrics().context("Failed to install Prometheus recorder")?;

    let state = init_app_state().await?;
    let store = state.store.clone();

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
        info!("Prometheus metrics available at /metrics");
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Document store closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
