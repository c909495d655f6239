mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = HostConfig::from_env()?;
    let app = routes::leptos_app().map_err(HostError::Router)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(port = config.port, "gradebook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
