//! Testy routera, które nie dochodzą do bazy danych.

use articles_backend::app;
use articles_backend::state::AppState;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    // Pula leniwa: połączenie powstałoby dopiero przy pierwszym zapytaniu SQL.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/articles_test")
        .unwrap();
    app(AppState { db_pool: pool })
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.into_body()).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_rejects_blank_fields_before_touching_the_database() {
    let payload = json!({ "title": "", "body": "treść", "excerpt": "" });
    let request = Request::post("/api/v1/articles")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response.into_body()).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(message.contains("excerpt"));
}

#[tokio::test]
async fn create_accepts_urlencoded_form_fields() {
    let request = Request::post("/api/v1/articles")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("title=&body=Tre%C5%9B%C4%87&excerpt=Zajawka"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    // Formularz został odczytany: odrzuca go walidacja pola, a nie typ treści.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response.into_body()).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(!message.contains("excerpt"));
}

#[tokio::test]
async fn create_rejects_unknown_content_type() {
    let request = Request::post("/api/v1/articles")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("title=a"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn non_numeric_article_id_is_a_bad_request() {
    let response = test_app()
        .oneshot(
            Request::get("/api/v1/articles/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
