use super::dto::{GenreForm, GenreFormPage, GenreListPage, MovieOption};
use super::service::GenreService;
use crate::common::flash;
use crate::common::response::{PageError, ServerError};
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;
use validator::Validate;

/// List all genres, with any flash message left by a previous write.
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> impl IntoResponse {
    match GenreService::get_list(&state.db).await {
        Ok(genres) => Json(GenreListPage {
            flash: flash::take(&cookies),
            genres,
        })
        .into_response(),
        Err(e) => ServerError(e).into_response(),
    }
}

/// Detail page. A missing id renders the generic error view, not a 404.
pub async fn details(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match GenreService::get_item(&state.db, id).await {
        Ok(Some(genre)) => Json(genre).into_response(),
        Ok(None) => PageError("Resource not found!".to_string()).into_response(),
        Err(e) => ServerError(e).into_response(),
    }
}

async fn form_page(
    state: &AppState,
    form: GenreForm,
    error: Option<String>,
) -> anyhow::Result<GenreFormPage> {
    let movies = MovieService::get_list(&state.db)
        .await?
        .into_iter()
        .map(MovieOption::from)
        .collect();

    Ok(GenreFormPage {
        form,
        error,
        movies,
    })
}

async fn rerender(state: &AppState, form: GenreForm, message: &str) -> Response {
    match form_page(state, form, Some(message.to_string())).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => ServerError(e).into_response(),
    }
}

pub async fn create_form(State(state): State<AppState>) -> impl IntoResponse {
    match form_page(&state, GenreForm::default(), None).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => ServerError(e).into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<GenreForm>,
) -> impl IntoResponse {
    if form.validate().is_err() {
        return rerender(&state, form, "Name is required").await;
    }

    match GenreService::add(&state.db, form.clone().into_model()).await {
        Ok(result) if result.is_successful() => {
            flash::set(&cookies, &result.message);
            Redirect::to("/genres").into_response()
        }
        Ok(result) => rerender(&state, form, &result.message).await,
        Err(e) => ServerError(e).into_response(),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match GenreService::get_item(&state.db, id).await {
        Ok(Some(genre)) => {
            let form = GenreForm {
                id: genre.id,
                name: genre.name,
            };
            match form_page(&state, form, None).await {
                Ok(page) => Json(page).into_response(),
                Err(e) => ServerError(e).into_response(),
            }
        }
        Ok(None) => PageError("Resource not found!".to_string()).into_response(),
        Err(e) => ServerError(e).into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    cookies: Cookies,
    Form(mut form): Form<GenreForm>,
) -> impl IntoResponse {
    // The route, not the form body, decides which row is updated.
    form.id = id;

    if form.validate().is_err() {
        return rerender(&state, form, "Name is required").await;
    }

    match GenreService::update(&state.db, form.clone().into_model()).await {
        Ok(result) if result.is_successful() => {
            flash::set(&cookies, &result.message);
            Redirect::to(&format!("/genres/{id}")).into_response()
        }
        Ok(result) => rerender(&state, form, &result.message).await,
        Err(e) => ServerError(e).into_response(),
    }
}

/// No confirmation step: delete and send the user back to the list with
/// whatever message the service produced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    cookies: Cookies,
) -> impl IntoResponse {
    match GenreService::delete_genre(&state.db, id).await {
        Ok(result) => {
            flash::set(&cookies, &result.message);
            Redirect::to("/genres").into_response()
        }
        Err(e) => ServerError(e).into_response(),
    }
}
