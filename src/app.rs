use crate::state::AppState;
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

pub async fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
