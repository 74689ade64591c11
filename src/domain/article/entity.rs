// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to one existing row. Absent fields keep their
/// stored value; id and slug are never part of an update.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            author_id: AuthorId::new(1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = sample_article();
        let now = Utc::now();
        let title = ArticleTitle::new("new title").unwrap();
        let body = ArticleBody::new("new body").unwrap();
        article.set_content(title.clone(), body.clone(), now);
        assert_eq!(article.title.as_str(), title.as_str());
        assert_eq!(article.body.as_str(), body.as_str());
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn update_builder_leaves_unset_fields_empty() {
        let now = Utc::now();
        let update = ArticleUpdate::new(ArticleId::new(7).unwrap(), now)
            .with_title(ArticleTitle::new("only the title").unwrap());
        assert!(update.title.is_some());
        assert!(update.body.is_none());
        assert_eq!(update.updated_at, now);
    }
}
