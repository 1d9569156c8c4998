//! Janus development API stub.
//!
//! Serves the two endpoints the browser client calls (`/health`,
//! `/test/capture`), the page shell at `/app`, and the browser bundle under
//! `/pkg`. It stores nothing.

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "janus-server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();
    let app = routes::app(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.to_string(), source })?;

    tracing::info!(%addr, site_root = %config.site_root.display(), "janus-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
