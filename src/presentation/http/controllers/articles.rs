// src/presentation/http/controllers/articles.rs
//
// JSON adapter over the article services. Mutating operations answer with
// the bare status literals existing API clients parse; lookup payloads are
// wrapped in a one-element array, matching the wire contract.
use crate::application::commands::articles::{
    ArticleDraft, ArticleRef, CreateArticleOutcome, DeleteArticleCommand, UpdateArticleCommand,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

fn json_literal(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn find_all(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let articles = state.services.article_queries.list_all().await.into_http()?;
    Ok(Json(json!([articles])).into_response())
}

pub async fn find_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(id)
        .await
        .into_http()?;
    Ok(Json(json!([article])).into_response())
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> Response {
    let draft = ArticleDraft {
        title: payload.title,
        body: payload.body,
    };

    match state
        .services
        .article_commands
        .create_article_validated(state.default_author, draft)
        .await
    {
        Ok(CreateArticleOutcome::Created(_)) => json_literal("Success"),
        Ok(CreateArticleOutcome::Rejected(errors)) => Json(errors).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "article create failed");
            json_literal("Failure")
        }
    }
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Response> {
    let command = UpdateArticleCommand {
        reference: ArticleRef::Id(id),
        title: payload.title,
        body: payload.body,
    };

    match state.services.article_commands.update_article(command).await {
        Ok(_) => Ok(json_literal("Success")),
        Err(err) if err.is_not_found() => Err(HttpError::from_error(err)),
        Err(err) => {
            tracing::warn!(error = %err, id, "article update failed");
            Ok(json_literal("Failure"))
        }
    }
}

pub async fn remove(Extension(state): Extension<HttpState>, Path(id): Path<i64>) -> Response {
    let command = DeleteArticleCommand {
        reference: ArticleRef::Id(id),
    };

    match state.services.article_commands.delete_article(command).await {
        Ok(_) => json_literal("Deleted"),
        Err(err) => {
            tracing::warn!(error = %err, id, "article remove failed");
            json_literal("Error")
        }
    }
}
