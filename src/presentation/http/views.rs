// src/presentation/http/views.rs
use crate::application::{dto::ArticleDto, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::flash::Flash;
use askama::Template;
use axum::response::Html;

pub struct ArticleView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: String,
}

impl From<ArticleDto> for ArticleView {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            slug: dto.slug,
            body: dto.body,
            created_at: dto.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub struct FlashView {
    pub level: &'static str,
    pub message: String,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            level: flash.level.as_str(),
            message: flash.message,
        }
    }
}

#[derive(Template)]
#[template(path = "articles/index.html")]
pub struct IndexPage {
    pub articles: Vec<ArticleView>,
    pub page: u32,
    pub has_prev: bool,
    pub has_more: bool,
    pub flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "articles/view.html")]
pub struct ViewPage {
    pub article: ArticleView,
    pub flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "articles/form.html")]
pub struct FormPage {
    pub heading: &'static str,
    pub action: String,
    pub title: String,
    pub body: String,
    pub flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

pub fn render<T: Template>(template: &T) -> HttpResult<Html<String>> {
    template.render().map(Html).map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(format!(
            "template rendering failed: {err}"
        )))
    })
}
