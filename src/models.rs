// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pagination::PageResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image: String,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Publiczny kształt artykułu zwracany przez API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        ArticleResponse {
            id: article.id,
            title: article.title,
            excerpt: article.excerpt,
            body: article.body,
            image: article.image,
        }
    }
}

// --- STRUKTURY PAYLOAD ---

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticlePayload {
    #[validate(length(min = 1, max = 255, message = "Tytuł jest wymagany"))]
    pub title: String,

    #[validate(length(min = 1, message = "Treść jest wymagana"))]
    pub body: String,

    #[validate(length(min = 1, message = "Zajawka jest wymagana"))]
    pub excerpt: String,

    pub category_id: Option<i64>,
}

// --- STRUKTURY ODPOWIEDZI ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesPage {
    pub items: Vec<ArticleResponse>,
    pub paging: PageResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesListResponse {
    pub articles: ArticlesPage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}
