use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleReadRepository, ArticleSlug},
};
use std::sync::Arc;

pub struct ListArticlesQuery {
    pub page: u32,
    pub limit: u32,
}

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let page = query.page.max(1);
        let limit = query.limit.max(1);
        let (records, total) = self.read_repo.list_page(page, limit).await?;
        let items = records.into_iter().map(ArticleDto::from).collect();
        Ok(Page::new(items, page, limit, total))
    }

    pub async fn list_all(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    pub async fn get_article_by_id(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
