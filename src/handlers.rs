// src/handlers.rs
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use validator::Validate;

use crate::errors::AppError;
use crate::extractor::ArticlePayload;
use crate::filters::ArticleListingParams;
use crate::models::{ArticleEnvelope, ArticleResponse, ArticlesListResponse, ArticlesPage};
use crate::pagination::paginate;
use crate::repository::{ArticleQuery, find_article_by_id, insert_article};
use crate::state::AppState;

pub async fn list_articles_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ArticleListingParams>,
) -> Result<Json<ArticlesListResponse>, AppError> {
    tracing::info!(
        "Obsłużono zapytanie GET /api/v1/articles z parametrami: {:?}",
        params
    );

    let request = params.page_request();
    let query = ArticleQuery::new(app_state.db_pool.clone(), params.filter());

    let mut articles = Vec::new();
    let paging = paginate(request, &query, &mut articles).await?;

    tracing::debug!(
        "Strona {} z {} ({} rekordów łącznie)",
        paging.page,
        paging.total_page,
        paging.count
    );

    Ok(Json(ArticlesListResponse {
        articles: ArticlesPage {
            items: articles.into_iter().map(ArticleResponse::from).collect(),
            paging,
        },
    }))
}

pub async fn get_article_handler(
    State(app_state): State<Arc<AppState>>,
    Path(article_id): Path<i64>,
) -> Result<Json<ArticleEnvelope>, AppError> {
    let article = find_article_by_id(&app_state.db_pool, article_id)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound) {
                tracing::warn!("Nie znaleziono artykułu o ID: {}", article_id);
            }
        })?;

    Ok(Json(ArticleEnvelope {
        article: article.into(),
    }))
}

pub async fn create_article_handler(
    State(app_state): State<Arc<AppState>>,
    ArticlePayload(payload): ArticlePayload,
) -> Result<(StatusCode, Json<ArticleEnvelope>), AppError> {
    payload.validate()?;

    let article = insert_article(&app_state.db_pool, &payload).await?;
    tracing::info!("Utworzono artykuł o ID: {}", article.id);

    Ok((
        StatusCode::CREATED,
        Json(ArticleEnvelope {
            article: article.into(),
        }),
    ))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
