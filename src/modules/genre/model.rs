use crate::modules::movie::model::Movie;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persistence shape of a genre row. Names are stored trimmed.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Domain model moved between the service and the web layer. An `id` of 0
/// marks a genre that has not been persisted yet; `movies` is a projection
/// of the associated movies, not independently owned.
#[derive(Debug, Serialize, Clone)]
pub struct GenreModel {
    pub id: i64,
    pub name: String,
    pub movies: Vec<Movie>,
}
