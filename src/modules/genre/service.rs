use super::model::GenreModel;
use super::repository::GenreRepository;
use crate::common::result::OperationResult;
use crate::infrastructure::db::pool::DbPool;
use anyhow::Result;
use tracing::debug;

pub struct GenreService;

impl GenreService {
    /// Projection of every genre to the domain model. No side effects.
    pub async fn query(pool: &DbPool) -> Result<Vec<GenreModel>> {
        Ok(GenreRepository::project(pool).await?)
    }

    pub async fn get_list(pool: &DbPool) -> Result<Vec<GenreModel>> {
        Self::query(pool).await
    }

    /// The single genre whose id matches, or `None`. Primary-key uniqueness
    /// guarantees at most one row.
    pub async fn get_item(pool: &DbPool, id: i64) -> Result<Option<GenreModel>> {
        Ok(GenreRepository::find_model(pool, id).await?)
    }

    pub async fn add(pool: &DbPool, model: GenreModel) -> Result<OperationResult> {
        let name = model.name.trim().to_string();

        if Self::name_in_use(pool, &name, None).await? {
            return Ok(OperationResult::error(
                "Genre with the same name already exists!",
            ));
        }

        match GenreRepository::insert(pool, &name).await {
            Ok(id) => {
                debug!(id, %name, "genre added");
                Ok(OperationResult::success("Genre added successfully."))
            }
            // Two writers can race the check above; the unique index on the
            // name catches the loser.
            Err(e) if is_unique_violation(&e) => Ok(OperationResult::error(
                "Genre with the same name already exists!",
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(pool: &DbPool, model: GenreModel) -> Result<OperationResult> {
        let name = model.name.trim().to_string();

        if Self::name_in_use(pool, &name, Some(model.id)).await? {
            return Ok(OperationResult::error(
                "Genre with the same name already exists!",
            ));
        }

        if !GenreRepository::exists(pool, model.id).await? {
            return Ok(OperationResult::error("Genre not found!"));
        }

        match GenreRepository::update_name(pool, model.id, &name).await {
            Ok(()) => {
                debug!(id = model.id, %name, "genre updated");
                Ok(OperationResult::success("Genre updated successfully."))
            }
            Err(e) if is_unique_violation(&e) => Ok(OperationResult::error(
                "Genre with the same name already exists!",
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_genre(pool: &DbPool, id: i64) -> Result<OperationResult> {
        if !GenreRepository::exists(pool, id).await? {
            return Ok(OperationResult::error("Genre not found!"));
        }

        GenreRepository::delete_with_links(pool, id).await?;
        debug!(id, "genre deleted");
        Ok(OperationResult::success("Genre deleted successfully."))
    }

    /// Case-insensitive name comparison, done in Rust so that non-ASCII
    /// letters fold too. `exclude_id` skips the row being updated.
    async fn name_in_use(pool: &DbPool, name: &str, exclude_id: Option<i64>) -> Result<bool> {
        let needle = name.to_lowercase();
        let names = GenreRepository::all_names(pool).await?;
        Ok(names
            .into_iter()
            .any(|(id, existing)| exclude_id != Some(id) && existing.trim().to_lowercase() == needle))
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
