//! Camp signup service entry point.

use anyhow::{anyhow, Context};
use camp_server::{build_router, AppState, ServerConfig};
use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let destination = config.log_destination().map_err(|err| anyhow!(err))?;
    camp_core::init_logging(config.log_level(), destination).map_err(|err| anyhow!(err))?;

    let conn = config
        .store_location()
        .open()
        .with_context(|| format!("failed to open camp store `{}`", config.database))?;
    let app = build_router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "event=server_listen module=server status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=server status=error error={err}");
    }
}
