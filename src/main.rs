mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "noexcel stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "noexcel listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
