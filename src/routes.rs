use crate::state::AppState;
use axum::Router;

pub fn configure_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
        .nest("/genres", crate::modules::genre::router())
}
