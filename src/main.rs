use cinefinder_api::{
    api::{create_router, AppState},
    config::Config,
    services::build_provider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinefinder_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Live TMDB or sample data, decided once here
    let catalog = build_provider(&config)?;
    let state =
        AppState::new(catalog, config.result_limit).with_session_ttl(config.session_ttl());

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
