use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::model::GenreModel;
use crate::modules::movie::model::Movie;

fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Form fields submitted by the create and edit pages. `id` stays 0 on the
/// create flow.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct GenreForm {
    #[serde(default)]
    pub id: i64,
    #[validate(custom(function = not_blank))]
    pub name: String,
}

impl GenreForm {
    pub fn into_model(self) -> GenreModel {
        GenreModel {
            id: self.id,
            name: self.name,
            movies: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieOption {
    pub id: i64,
    pub title: String,
}

impl From<Movie> for MovieOption {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreListPage {
    pub flash: Option<String>,
    pub genres: Vec<GenreModel>,
}

#[derive(Debug, Serialize)]
pub struct GenreFormPage {
    pub form: GenreForm,
    pub error: Option<String>,
    pub movies: Vec<MovieOption>,
}
