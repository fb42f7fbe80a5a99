use std::time::Duration;

use anyhow::Context;
use portfolio_api::{
    AppState, app,
    config::Config,
    github::GithubClient,
    notify::Notifier,
    seed,
    store::{Mirror, Store},
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;

    let mirror = Mirror::connect_lazy(&config.mirror_url).context("configuring mirror store")?;
    mirror.ensure_schema().await;
    let store = Store::new(config.data_dir.clone(), mirror);

    info!("Portfolio API starting up...");
    if let Err(e) = seed::seed_sample_data(&store).await {
        error!("sample data initialization failed: {e}");
    }

    let http = reqwest::Client::builder()
        .user_agent(concat!("portfolio-api/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("building http client")?;

    let state = AppState {
        store,
        github: GithubClient::new(http.clone(), config.github_api_base.clone()),
        notifier: Notifier::new(http, config.contact_webhook_url.clone()),
    };

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Portfolio API shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
