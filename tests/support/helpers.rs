// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticles};
use axum::body::to_bytes;
use axum::response::Response;
use pressroom::application::commands::articles::CreateArticleCommand;
use pressroom::application::dto::ArticleDto;
use pressroom::application::ports::{time::Clock, util::SlugGenerator};
use pressroom::application::services::ApplicationServices;
use pressroom::domain::article::{ArticleReadRepository, ArticleWriteRepository, AuthorId};
use pressroom::infrastructure::util::DefaultSlugGenerator;
use pressroom::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryArticles>,
    pub author: AuthorId,
}

pub fn build_services() -> TestContext {
    let store = Arc::new(InMemoryArticles::default());
    let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo, read_repo, clock, slugger,
    ));

    TestContext {
        services,
        store,
        author: AuthorId::new(1).unwrap(),
    }
}

pub fn make_test_router() -> (axum::Router, TestContext) {
    let context = build_services();
    let state = HttpState {
        services: Arc::clone(&context.services),
        default_author: context.author,
        page_size: 20,
    };
    (build_router(state), context)
}

pub async fn seed_article(context: &TestContext, title: &str, body: &str) -> ArticleDto {
    context
        .services
        .article_commands
        .create_article(
            context.author,
            CreateArticleCommand {
                title: title.into(),
                body: body.into(),
            },
        )
        .await
        .expect("seed article")
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response) -> Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("json body")
}
