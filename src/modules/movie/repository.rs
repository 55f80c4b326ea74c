use super::model::Movie;
use crate::infrastructure::db::pool::DbPool;

pub struct MovieRepository;

impl MovieRepository {
    pub async fn find_all(pool: &DbPool) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, release_year
            FROM movies
            ORDER BY title ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
