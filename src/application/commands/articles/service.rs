// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSlugService,
        ArticleWriteRepository,
    },
};

/// Reference to one existing article, by store id (JSON flow) or by the
/// human-facing slug (form flow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRef {
    Id(i64),
    Slug(String),
}

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn resolve(&self, reference: &ArticleRef) -> ApplicationResult<Article> {
        let found = match reference {
            ArticleRef::Id(id) => {
                let id = ArticleId::new(*id)?;
                self.read_repo.find_by_id(id).await?
            }
            ArticleRef::Slug(slug) => {
                let slug = ArticleSlug::new(slug.clone())?;
                self.read_repo.find_by_slug(&slug).await?
            }
        };
        found.ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
