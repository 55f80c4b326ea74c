use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_year: Option<i64>,
}
