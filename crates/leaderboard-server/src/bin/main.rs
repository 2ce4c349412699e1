use anyhow::Context;
use tracing::info;

use leaderboard_server::config::ServerConfig;
use leaderboard_server::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = ServerConfig::from_env();
    leaderboard_server::ensure_store_dir(&config).await;

    let addr = config.bind_addr();
    info!(
        store = %config.store_path.display(),
        static_dir = %config.static_dir.display(),
        "starting leaderboard server"
    );

    let (app, _state) = leaderboard_server::build_app(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
