// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, service::ArticleRef};
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub reference: ArticleRef,
}

impl ArticleCommandService {
    /// Hard delete. Returns the removed article so callers can name it in
    /// their notification.
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.resolve(&command.reference).await?;
        self.write_repo.delete(article.id).await?;
        tracing::info!(id = i64::from(article.id), slug = %article.slug, "article deleted");
        Ok(article.into())
    }
}
