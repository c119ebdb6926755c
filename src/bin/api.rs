use anyhow::Result;
use commentary_box::{
    app,
    app_state::AppState,
    config::{self, Config},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Before tracing so RUST_LOG and LOG_FORMAT may come from the file
    let env_file = config::load_dotenv();
    init_tracing();
    if let Some(path) = env_file {
        info!(path = %path.display(), "loaded environment file");
    }

    // Refuses to start without OPENAI_API_KEY
    let config = Config::from_env()?;
    info!(?config, "configuration loaded");

    let state = AppState::from_config(&config);
    let router = app::router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
