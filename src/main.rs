mod config;
mod routes;

use std::process::ExitCode;

use config::HostConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "product-dashboard failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env()?;
    let addr = config.listen_addr()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, api_url = dashboard_client::config::api_base_url(), "product-dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
