use movie_recs::api::{create_router, AppState, Engine};
use movie_recs::config::Config;
use movie_recs::data;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let engine: Engine = data::load_or_build(&config)?.into();
    tracing::info!(movies = engine.movies.len(), "catalog ready");

    let state = AppState::new(engine);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
