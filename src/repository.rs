// src/repository.rs
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::AppError;
use crate::filters::ArticleFilter;
use crate::models::{Article, CreateArticlePayload};
use crate::pagination::Queryable;

/// Przefiltrowana lista artykułów w Postgresie.
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pool: PgPool,
    filter: ArticleFilter,
}

impl ArticleQuery {
    pub fn new(pool: PgPool, filter: ArticleFilter) -> Self {
        Self { pool, filter }
    }
}

/// Dokleja klauzule WHERE wynikające z filtra do podanego zapytania.
fn push_article_filters(filter: &ArticleFilter, builder: &mut QueryBuilder<'_, Postgres>) {
    let mut separator = " WHERE ";

    if let Some(category_id) = filter.category_id {
        builder.push(separator);
        separator = " AND ";
        builder.push("category_id = ").push_bind(category_id);
    }
    if let Some(search_term) = &filter.search {
        builder.push(separator);
        let like_pattern = format!("%{}%", search_term);
        builder
            .push("(title ILIKE ")
            .push_bind(like_pattern.clone())
            .push(" OR excerpt ILIKE ")
            .push_bind(like_pattern.clone())
            .push(" OR body ILIKE ")
            .push_bind(like_pattern)
            .push(")");
    }
}

#[async_trait]
impl Queryable for ArticleQuery {
    type Record = Article;

    async fn count(&self) -> Result<i64, AppError> {
        let mut count_query_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_article_filters(&self.filter, &mut count_query_builder);

        let total = count_query_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn fetch(&self, offset: i64, limit: i64) -> Result<Vec<Article>, AppError> {
        let mut data_query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT id, title, excerpt, body, image, category_id, created_at, updated_at
            FROM articles
            "#,
        );
        push_article_filters(&self.filter, &mut data_query_builder);
        data_query_builder.push(" ORDER BY id ASC");
        data_query_builder.push(" LIMIT ").push_bind(limit);
        data_query_builder.push(" OFFSET ").push_bind(offset);

        let articles = data_query_builder
            .build_query_as::<Article>()
            .fetch_all(&self.pool)
            .await?;
        Ok(articles)
    }
}

pub async fn find_article_by_id(pool: &PgPool, article_id: i64) -> Result<Article, AppError> {
    let result = sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, excerpt, body, image, category_id, created_at, updated_at
        FROM articles
        WHERE id = $1
        "#,
    )
    .bind(article_id)
    .fetch_one(pool)
    .await;

    match result {
        Ok(article) => Ok(article),
        Err(sqlx::Error::RowNotFound) => Err(AppError::NotFound),
        Err(e) => Err(AppError::from(e)),
    }
}

pub async fn insert_article(
    pool: &PgPool,
    payload: &CreateArticlePayload,
) -> Result<Article, AppError> {
    let article = sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (title, excerpt, body, image, category_id)
        VALUES ($1, $2, $3, '', $4)
        RETURNING id, title, excerpt, body, image, category_id, created_at, updated_at
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.excerpt)
    .bind(&payload.body)
    .bind(payload.category_id)
    .fetch_one(pool)
    .await?;

    Ok(article)
}
