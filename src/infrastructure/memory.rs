// src/infrastructure/memory.rs
use crate::application::ports::{ClockPort, articles::ArticleService};
use crate::domain::{
    article::Article,
    errors::{DomainError, DomainResult},
};
use crate::infrastructure::cursor::ArticleCursor;
use async_trait::async_trait;
use std::{collections::BTreeMap, ops::Bound, sync::Arc};
use tokio::sync::RwLock;

/// Process-local article service used when no external backend is wired in.
///
/// Articles are kept in id order; ids are handed out sequentially from 1.
pub struct InMemoryArticleService {
    inner: RwLock<Inner>,
    clock: Arc<ClockPort>,
}

#[derive(Default)]
struct Inner {
    articles: BTreeMap<i64, Article>,
    last_id: i64,
}

impl InMemoryArticleService {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.articles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.articles.is_empty()
    }
}

#[async_trait]
impl ArticleService for InMemoryArticleService {
    async fn fetch(&self, cursor: &str, num: i64) -> DomainResult<(Vec<Article>, String)> {
        if num <= 0 {
            return Err(DomainError::BadParamInput);
        }
        let after = ArticleCursor::decode_optional(cursor)?;
        let limit = usize::try_from(num).unwrap_or(usize::MAX);

        let inner = self.inner.read().await;
        let lower = after.map_or(Bound::Unbounded, |c| Bound::Excluded(c.last_id));
        let page: Vec<Article> = inner
            .articles
            .range((lower, Bound::Unbounded))
            .take(limit)
            .map(|(_, article)| article.clone())
            .collect();

        // A short page means there is nothing left to ask for.
        let next_cursor = match page.last() {
            Some(last) if page.len() == limit => ArticleCursor::new(last.id).encode(),
            _ => String::new(),
        };

        tracing::debug!(returned = page.len(), "fetched article page");
        Ok((page, next_cursor))
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<Article> {
        self.inner
            .read()
            .await
            .articles
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, article: &mut Article) -> DomainResult<()> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .articles
            .get_mut(&article.id)
            .ok_or(DomainError::NotFound)?;

        article.created_at = existing.created_at;
        article.updated_at = Some(self.clock.now());
        existing.clone_from(article);
        Ok(())
    }

    async fn get_by_title(&self, title: &str) -> DomainResult<Article> {
        self.inner
            .read()
            .await
            .articles
            .values()
            .find(|article| article.title == title)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn store(&self, article: &mut Article) -> DomainResult<()> {
        let mut inner = self.inner.write().await;

        // Blank titles are what an unbound create request carries; only
        // real titles are held unique.
        if !article.title.trim().is_empty()
            && inner.articles.values().any(|a| a.title == article.title)
        {
            return Err(DomainError::Conflict);
        }

        let id = inner
            .last_id
            .checked_add(1)
            .ok_or(DomainError::InternalServerError)?;
        let now = self.clock.now();

        article.id = id;
        article.created_at = Some(now);
        article.updated_at = Some(now);

        inner.last_id = id;
        inner.articles.insert(id, article.clone());
        tracing::debug!(article_id = id, "stored article");
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner
            .write()
            .await
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}
