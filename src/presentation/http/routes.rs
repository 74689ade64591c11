// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, pages};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    response::Redirect,
    routing::{any, get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(|| async { Redirect::to("/articles") }))
        .route("/health", get(health))
        .route("/articles", get(pages::index))
        .route("/articles/add", get(pages::add_form).post(pages::add_submit))
        .route(
            "/articles/edit/{slug}",
            get(pages::edit_form)
                .post(pages::edit_submit)
                .put(pages::edit_submit),
        )
        // delete allows POST and DELETE only; anything else is 405 before
        // the store is ever touched
        .route(
            "/articles/delete/{slug}",
            post(pages::delete).delete(pages::delete),
        )
        .route("/articles/{slug}", get(pages::view))
        .route("/api/v1/articles/find-all", any(articles::find_all))
        .route(
            "/api/v1/articles/find-by-id/{id}",
            any(articles::find_by_id),
        )
        .route("/api/v1/articles/create", post(articles::create))
        .route("/api/v1/articles/update/{id}", put(articles::update))
        .route("/api/v1/articles/remove/{id}", any(articles::remove))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
