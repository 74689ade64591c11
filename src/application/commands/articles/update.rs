use super::{ArticleCommandService, service::ArticleRef};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleBody, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub reference: ArticleRef,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// Merge the provided fields onto an existing article. Absent fields are
    /// left unchanged; id and slug are preserved. The write is a single
    /// statement, so either the full merged row lands or nothing does.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.resolve(&command.reference).await?;

        let title = command.title.map(ArticleTitle::new).transpose()?;
        let body = command.body.map(ArticleBody::new).transpose()?;

        if title.is_none() && body.is_none() {
            return Ok(article.into());
        }

        let now = self.clock.now();
        let new_title = title.unwrap_or_else(|| article.title.clone());
        let new_body = body.unwrap_or_else(|| article.body.clone());
        article.set_content(new_title.clone(), new_body.clone(), now);

        let update = ArticleUpdate::new(article.id, now)
            .with_title(new_title)
            .with_body(new_body);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(id = i64::from(updated.id), "article updated");
        Ok(updated.into())
    }
}
