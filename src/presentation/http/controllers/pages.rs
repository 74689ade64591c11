// src/presentation/http/controllers/pages.rs
//
// HTML adapter over the article services: server-rendered list/view/form
// pages, flash notifications, redirect-to-list after successful writes.
use crate::application::commands::articles::{
    ArticleRef, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use crate::application::error::ApplicationError;
use crate::application::queries::articles::{GetArticleBySlugQuery, ListArticlesQuery};
use crate::presentation::http::error::status_for;
use crate::presentation::http::flash::{self, Flash, IncomingFlash};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{self, ErrorPage, FormPage, IndexPage, ViewPage};
use askama::Template;
use axum::{
    Extension,
    extract::{Form, Path, Query},
    http::{StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Deserialize)]
pub struct ArticleFormData {
    pub title: String,
    pub body: String,
}

/// Render a page, clearing the flash cookie when this render consumed one.
fn render_page<T: Template>(template: &T, consumed_flash: bool) -> Response {
    match views::render(template) {
        Ok(html) => {
            let mut response = html.into_response();
            if consumed_flash {
                response.headers_mut().append(SET_COOKIE, flash::clear_cookie());
            }
            response
        }
        Err(err) => err.into_response(),
    }
}

fn page_error(err: &ApplicationError) -> Response {
    let status = status_for(err);
    let template = ErrorPage {
        status: status.as_u16(),
        message: err.to_string(),
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_err) => {
            tracing::error!(error = %render_err, "error page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Query(params): Query<ListParams>,
) -> Response {
    let query = ListArticlesQuery {
        page: params.page,
        limit: state.page_size,
    };

    match state.services.article_queries.list_articles(query).await {
        Ok(page) => {
            let consumed = flash.0.is_some();
            let template = IndexPage {
                articles: page.items.into_iter().map(Into::into).collect(),
                page: page.page,
                has_prev: page.page > 1,
                has_more: page.has_more,
                flash: flash.0.map(Into::into),
            };
            render_page(&template, consumed)
        }
        Err(err) => page_error(&err),
    }
}

pub async fn view(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Path(slug): Path<String>,
) -> Response {
    match state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
    {
        Ok(article) => {
            let consumed = flash.0.is_some();
            let template = ViewPage {
                article: article.into(),
                flash: flash.0.map(Into::into),
            };
            render_page(&template, consumed)
        }
        Err(err) => page_error(&err),
    }
}

pub async fn add_form(flash: IncomingFlash) -> Response {
    let consumed = flash.0.is_some();
    let template = FormPage {
        heading: "Add Article",
        action: "/articles/add".into(),
        title: String::new(),
        body: String::new(),
        flash: flash.0.map(Into::into),
    };
    render_page(&template, consumed)
}

pub async fn add_submit(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleFormData>,
) -> Response {
    let command = CreateArticleCommand {
        title: form.title.clone(),
        body: form.body.clone(),
    };

    match state
        .services
        .article_commands
        .create_article(state.default_author, command)
        .await
    {
        Ok(_) => flash::redirect_with_flash(
            "/articles",
            &Flash::success("Your article has been saved."),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "article add failed");
            let template = FormPage {
                heading: "Add Article",
                action: "/articles/add".into(),
                title: form.title,
                body: form.body,
                flash: Some(Flash::error("Unable to add your article.").into()),
            };
            render_page(&template, false)
        }
    }
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Path(slug): Path<String>,
) -> Response {
    match state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
    {
        Ok(article) => {
            let consumed = flash.0.is_some();
            let template = FormPage {
                heading: "Edit Article",
                action: format!("/articles/edit/{}", article.slug),
                title: article.title,
                body: article.body,
                flash: flash.0.map(Into::into),
            };
            render_page(&template, consumed)
        }
        Err(err) => page_error(&err),
    }
}

pub async fn edit_submit(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Form(form): Form<ArticleFormData>,
) -> Response {
    let command = UpdateArticleCommand {
        reference: ArticleRef::Slug(slug.clone()),
        title: Some(form.title.clone()),
        body: Some(form.body.clone()),
    };

    match state.services.article_commands.update_article(command).await {
        Ok(_) => flash::redirect_with_flash(
            "/articles",
            &Flash::success("Your article has been updated."),
        ),
        Err(err) if err.is_not_found() => page_error(&err),
        Err(err) => {
            tracing::warn!(error = %err, slug, "article edit failed");
            let template = FormPage {
                heading: "Edit Article",
                action: format!("/articles/edit/{slug}"),
                title: form.title,
                body: form.body,
                flash: Some(Flash::error("Unable to update your article.").into()),
            };
            render_page(&template, false)
        }
    }
}

pub async fn delete(Extension(state): Extension<HttpState>, Path(slug): Path<String>) -> Response {
    let command = DeleteArticleCommand {
        reference: ArticleRef::Slug(slug.clone()),
    };

    match state.services.article_commands.delete_article(command).await {
        Ok(article) => flash::redirect_with_flash(
            "/articles",
            &Flash::success(format!("The {} article has been deleted.", article.title)),
        ),
        Err(err) if err.is_not_found() => page_error(&err),
        Err(err) => {
            tracing::warn!(error = %err, slug, "article delete failed");
            flash::redirect_with_flash("/articles", &Flash::error("Unable to delete your article."))
        }
    }
}
