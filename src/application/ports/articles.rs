// src/application/ports/articles.rs
use crate::domain::{article::Article, errors::DomainResult};
use async_trait::async_trait;

/// Business operations over articles. The HTTP layer only ever talks to this
/// trait; persistence and business rules live behind it.
///
/// Routes use `fetch`, `get_by_id`, `store` and `delete`. `update` and
/// `get_by_title` are part of the contract for other callers.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Returns up to `num` articles after `cursor` plus the cursor for the
    /// following page. An empty cursor means "from the start".
    async fn fetch(&self, cursor: &str, num: i64) -> DomainResult<(Vec<Article>, String)>;

    async fn get_by_id(&self, id: i64) -> DomainResult<Article>;

    async fn update(&self, article: &mut Article) -> DomainResult<()>;

    async fn get_by_title(&self, title: &str) -> DomainResult<Article>;

    /// Persists `article`, filling in whatever the service owns (id, timestamps).
    async fn store(&self, article: &mut Article) -> DomainResult<()>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
