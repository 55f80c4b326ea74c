use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/new", get(handler::create_form).post(handler::create))
        .route("/{id}", get(handler::details))
        .route("/{id}/edit", get(handler::edit_form).post(handler::edit))
        .route("/{id}/delete", get(handler::delete))
}
