use shipintern::app;
use shipintern::state::{AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Starting ShipIntern...");

    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();

    // キーがなくても起動はする。該当する機能だけが使えなくなる
    if config.jsearch.api_key.is_none() {
        tracing::warn!("RAPIDAPI_KEY is not set. Listing search will return no results.");
    }
    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set. AI search will respond with an error.");
    }
    tracing::info!(
        "Listing host: {}, model: {}, upstream timeout: {:?}",
        config.jsearch.host,
        config.gemini.model,
        config.upstream_timeout
    );

    let app_state = AppState::new(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    println!("Attempting to bind/listen on {}", addr);
    tracing::info!("ShipIntern listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Server started successfully");
    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
