// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use pressroom::application::ports::time::Clock;
use pressroom::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use pressroom::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

/* -------------------------------- article store -------------------------------- */

/// Functional in-memory article store backing both repository traits.
/// Ids are monotonic and never reused after a delete, like the real store.
#[derive(Default)]
pub struct InMemoryArticles {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
    fail_writes: AtomicBool,
}

impl InMemoryArticles {
    /// Make every subsequent write fail with a persistence error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("storage offline".into()))
        } else {
            Ok(())
        }
    }

    fn sorted_rows(&self) -> Vec<Article> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already taken".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Article {
            id: ArticleId::new(*next)?,
            title: article.title,
            slug: article.slug,
            body: article.body,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(body) = update.body {
            row.body = body;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            Err(DomainError::NotFound("article not found".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug)
            .cloned())
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Article>, u64)> {
        let rows = self.sorted_rows();
        let total = rows.len() as u64;
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = ((page - 1) * page_size) as usize;
        let items = rows
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.sorted_rows())
    }
}

/* -------------------------------- clock -------------------------------- */

/// Clock pinned to a fixed instant so timestamps are deterministic.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
