// src/application/commands/articles/create.rs
use super::{ArticleCommandService, validate::FieldErrors, validate_draft};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleBody, ArticleTitle, AuthorId, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

/// Raw create input before the explicit validator has seen it. Fields are
/// optional so presence itself can be checked.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub enum CreateArticleOutcome {
    Created(ArticleDto),
    Rejected(FieldErrors),
}

impl ArticleCommandService {
    /// Create relying on entity-level rules only (the form add contract:
    /// non-empty title and body, no length rule).
    pub async fn create_article(
        &self,
        author: AuthorId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title).await?;

        let new_article = NewArticle {
            title,
            slug,
            body,
            author_id: author,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(id = i64::from(created.id), slug = %created.slug, "article created");
        Ok(created.into())
    }

    /// Create behind the explicit field validator. On violation the draft is
    /// rejected with a field/message map and nothing is persisted.
    pub async fn create_article_validated(
        &self,
        author: AuthorId,
        draft: ArticleDraft,
    ) -> ApplicationResult<CreateArticleOutcome> {
        let errors = validate_draft(&draft);
        if !errors.is_empty() {
            return Ok(CreateArticleOutcome::Rejected(errors));
        }

        // Presence was just checked; the defaults are unreachable.
        let command = CreateArticleCommand {
            title: draft.title.unwrap_or_default(),
            body: draft.body.unwrap_or_default(),
        };
        self.create_article(author, command)
            .await
            .map(CreateArticleOutcome::Created)
    }
}
