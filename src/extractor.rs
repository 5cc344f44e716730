// src/extractor.rs

use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request},
    http::{StatusCode, header},
};

use crate::errors::AppError;
use crate::models::CreateArticlePayload;

/// Treść żądania tworzenia artykułu: JSON, formularz urlencoded lub multipart.
/// Części plikowe (np. `image`) są pomijane.
pub struct ArticlePayload(pub CreateArticlePayload);

impl<S> FromRequest<S> for ArticlePayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<CreateArticlePayload>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            Ok(ArticlePayload(payload))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            Ok(ArticlePayload(payload_from_fields(&fields)?))
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            let fields = text_fields(multipart).await?;
            Ok(ArticlePayload(payload_from_fields(&fields)?))
        } else {
            tracing::warn!("Odrzucono treść o typie: '{}'", content_type);
            Err(AppError::UnsupportedMediaType(content_type))
        }
    }
}

fn rejected(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(message),
        StatusCode::UNPROCESSABLE_ENTITY => AppError::UnprocessableEntity(message),
        _ => AppError::BadRequest(message),
    }
}

async fn text_fields(mut multipart: Multipart) -> Result<HashMap<String, String>, AppError> {
    let mut text_fields: HashMap<String, String> = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!("Odebrano pole multipart bez nazwy, pomijam");
                continue;
            }
        };
        if field_name == "image" || field.file_name().is_some() {
            tracing::debug!("Pomijam część plikową: {}", field_name);
            continue;
        }
        let value = field.text().await?;
        text_fields.insert(field_name, value);
    }

    Ok(text_fields)
}

/// Brakujące pola tekstowe stają się pustymi napisami, żeby zgłosiła je walidacja.
fn payload_from_fields(fields: &HashMap<String, String>) -> Result<CreateArticlePayload, AppError> {
    let text = |name: &str| fields.get(name).cloned().unwrap_or_default();

    let category_id = match fields.get("category_id").map(|s| s.trim()) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            AppError::UnprocessableEntity(
                "Pole 'category_id' musi być liczbą całkowitą".to_string(),
            )
        })?),
    };

    Ok(CreateArticlePayload {
        title: text("title"),
        body: text("body"),
        excerpt: text("excerpt"),
        category_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use pretty_assertions::assert_eq;

    async fn extract(content_type: &str, body: &str) -> Result<CreateArticlePayload, AppError> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/articles")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        ArticlePayload::from_request(request, &())
            .await
            .map(|ArticlePayload(payload)| payload)
    }

    #[tokio::test]
    async fn reads_json() {
        let payload = extract(
            "application/json",
            r#"{"title":"Tytuł","body":"Treść","excerpt":"Zajawka","category_id":3}"#,
        )
        .await
        .unwrap();
        assert_eq!(payload.title, "Tytuł");
        assert_eq!(payload.category_id, Some(3));
    }

    #[tokio::test]
    async fn reads_urlencoded_form() {
        let payload = extract(
            "application/x-www-form-urlencoded",
            "title=Pierwszy+wpis&body=Tre%C5%9B%C4%87&excerpt=Kr%C3%B3tko&category_id=",
        )
        .await
        .unwrap();
        assert_eq!(payload.title, "Pierwszy wpis");
        assert_eq!(payload.body, "Treść");
        assert_eq!(payload.excerpt, "Krótko");
        assert_eq!(payload.category_id, None);
    }

    #[tokio::test]
    async fn reads_multipart_text_and_skips_image() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"title\"\r\n\r\n\
            Tytuł\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"image\"; filename=\"okladka.png\"\r\n\
            Content-Type: image/png\r\n\r\n\
            PNGDATA\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"body\"\r\n\r\n\
            Treść\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"excerpt\"\r\n\r\n\
            Zajawka\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"category_id\"\r\n\r\n\
            7\r\n\
            --XYZ--\r\n";

        let payload = extract("multipart/form-data; boundary=XYZ", body)
            .await
            .unwrap();
        assert_eq!(payload.title, "Tytuł");
        assert_eq!(payload.body, "Treść");
        assert_eq!(payload.excerpt, "Zajawka");
        assert_eq!(payload.category_id, Some(7));
    }

    #[tokio::test]
    async fn missing_form_fields_become_empty() {
        let payload = extract("application/x-www-form-urlencoded", "title=Tylko+tytu%C5%82")
            .await
            .unwrap();
        assert_eq!(payload.body, "");
        assert_eq!(payload.excerpt, "");
    }

    #[tokio::test]
    async fn non_numeric_category_is_rejected() {
        let err = extract("application/x-www-form-urlencoded", "title=a&category_id=abc")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn plain_text_is_unsupported() {
        let err = extract("text/plain", "title=a").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
