use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use movie_catalog::app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::pool::DbPool;
use movie_catalog::state::AppState;

async fn test_app() -> (Router, DbPool) {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let config = AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
    };
    let state = AppState::new(config, pool.clone());
    (app::create_app(state).await, pool)
}

async fn seed_genre(pool: &DbPool, name: &str) -> i64 {
    sqlx::query("INSERT INTO genres (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_redirects_to_list_and_sets_flash() {
    let (app, _pool) = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post("/genres/new", "name=%20%20Action%20%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/genres");

    // Cookie values may not contain spaces, so the message travels encoded.
    let flash = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(flash.contains("Genre%20added%20successfully."));

    // The list page picks the flash up and shows the trimmed name.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/genres")
                .header(header::COOKIE, "flash=Genre%20added%20successfully.")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Reading the flash clears it: the response carries a removal cookie.
    let removal = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(removal.starts_with("flash=;"));

    let page = json_body(response).await;
    assert_eq!(page["flash"], "Genre added successfully.");
    assert_eq!(page["genres"][0]["name"], "Action");
}

#[tokio::test]
async fn create_with_blank_name_rerenders_form() {
    let (app, pool) = test_app().await;

    let response = app
        .oneshot(form_post("/genres/new", "name=%20%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["error"], "Name is required");

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genres")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn create_duplicate_rerenders_with_service_message() {
    let (app, pool) = test_app().await;
    seed_genre(&pool, "Drama").await;

    let response = app.oneshot(form_post("/genres/new", "name=drama")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["error"], "Genre with the same name already exists!");
    assert_eq!(page["form"]["name"], "drama");
}

#[tokio::test]
async fn detail_of_missing_genre_renders_error_view() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/genres/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // The page flow renders a generic error view, not a 404.
    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["message"], "Resource not found!");
}

#[tokio::test]
async fn edit_redirects_to_detail_page() {
    let (app, pool) = test_app().await;
    let id = seed_genre(&pool, "Drama").await;

    let response = app
        .oneshot(form_post(&format!("/genres/{id}/edit"), "name=Thriller"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/genres/{id}").as_str()
    );

    let name = sqlx::query_scalar::<_, String>("SELECT name FROM genres WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Thriller");
}

#[tokio::test]
async fn delete_always_redirects_to_list() {
    let (app, pool) = test_app().await;
    let id = seed_genre(&pool, "Drama").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/genres/{id}/delete"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/genres");
    let flash = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(flash.contains("Genre%20deleted%20successfully."));

    // Deleting something that is already gone still redirects, carrying the
    // error message instead.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/genres/{id}/delete"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let flash = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(flash.contains("Genre%20not%20found%21"));
}

#[tokio::test]
async fn form_pages_offer_movie_options() {
    let (app, pool) = test_app().await;
    sqlx::query("INSERT INTO movies (title, release_year) VALUES ('Heat', 1995)")
        .execute(&pool)
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/genres/new").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["movies"][0]["title"], "Heat");
    assert_eq!(page["form"]["name"], "");
    assert_eq!(page["error"], serde_json::Value::Null);
}
