use std::collections::HashMap;

use sqlx::FromRow;

use super::model::{Genre, GenreModel};
use crate::infrastructure::db::pool::DbPool;
use crate::modules::movie::model::Movie;

#[derive(Debug, FromRow)]
struct LinkedMovieRow {
    genre_id: i64,
    id: i64,
    title: String,
    release_year: Option<i64>,
}

pub struct GenreRepository;

impl GenreRepository {
    /// Projects every genre row to the domain shape with its movies
    /// attached, ordered by id.
    pub async fn project(pool: &DbPool) -> Result<Vec<GenreModel>, sqlx::Error> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        let rows = sqlx::query_as::<_, LinkedMovieRow>(
            r#"
            SELECT mg.genre_id, m.id, m.title, m.release_year
            FROM movie_genres mg
            JOIN movies m ON m.id = mg.movie_id
            ORDER BY m.id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        let mut movies_by_genre: HashMap<i64, Vec<Movie>> = HashMap::new();
        for row in rows {
            movies_by_genre.entry(row.genre_id).or_default().push(Movie {
                id: row.id,
                title: row.title,
                release_year: row.release_year,
            });
        }

        Ok(genres
            .into_iter()
            .map(|g| GenreModel {
                movies: movies_by_genre.remove(&g.id).unwrap_or_default(),
                id: g.id,
                name: g.name,
            })
            .collect())
    }

    pub async fn find_model(pool: &DbPool, id: i64) -> Result<Option<GenreModel>, sqlx::Error> {
        let Some(genre) = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year
            FROM movie_genres mg
            JOIN movies m ON m.id = mg.movie_id
            WHERE mg.genre_id = ?
            ORDER BY m.id ASC
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(GenreModel {
            id: genre.id,
            name: genre.name,
            movies,
        }))
    }

    pub async fn exists(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM genres WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Every (id, name) pair. Name comparisons happen in the service, not
    /// in SQL: SQLite's lower() folds only ASCII.
    pub async fn all_names(pool: &DbPool) -> Result<Vec<(i64, String)>, sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM genres")
            .fetch_all(pool)
            .await
    }

    pub async fn insert(pool: &DbPool, name: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO genres (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_name(pool: &DbPool, id: i64, name: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE genres SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Removes the genre's join rows and then the genre row itself as one
    /// transaction, so a partial failure cannot leave orphans.
    pub async fn delete_with_links(pool: &DbPool, id: i64) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM movie_genres WHERE genre_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
