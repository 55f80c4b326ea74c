use super::model::Movie;
use super::repository::MovieRepository;
use crate::infrastructure::db::pool::DbPool;
use anyhow::Result;

/// Read-only collaborator: the genre pages only ever list movies.
pub struct MovieService;

impl MovieService {
    pub async fn get_list(pool: &DbPool) -> Result<Vec<Movie>> {
        let movies = MovieRepository::find_all(pool).await?;
        Ok(movies)
    }
}
