use dotenvy::dotenv;
use tracing::info;

use movie_catalog::{app, config, infrastructure, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = config::settings::AppConfig::new()?;
    let db = infrastructure::db::pool::connect_to_db(&config.database_url).await?;
    infrastructure::db::pool::run_migrations(&db).await?;

    let port = config.server_port;
    let state = state::AppState::new(config, db);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
