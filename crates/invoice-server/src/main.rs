use invoice_server::{build_router, config::Config, state::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load()?;
    info!(assets_dir = %config.assets_dir().display(), "loading assets");
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = config.bind_address();
    info!("Starting invoice server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,invoice_server=debug,invoice_layout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
