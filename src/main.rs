use std::net::SocketAddr;

use reclutamiento_backend::{
    config::{get_config, init_config, Environment},
    database::pool::create_pool,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let default_filter = match config.environment {
        Environment::Production => "reclutamiento_backend=info,tower_http=info",
        Environment::Development => "reclutamiento_backend=debug,tower_http=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(pool);
    let app = reclutamiento_backend::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Servidor corriendo en el puerto {}", config.port);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
