// tests/support/mocks.rs
//! 呼び出しを記録するスパイ記事サービス
use article_api::application::ports::articles::ArticleService;
use article_api::domain::{
    article::Article,
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use std::sync::Mutex;

/// スパイが受け取った呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch { cursor: String, num: i64 },
    GetById(i64),
    Update(Article),
    GetByTitle(String),
    Store(Article),
    Delete(i64),
}

/// 設定された応答を返しつつ、すべての呼び出しを記録する
#[derive(Default)]
pub struct SpyArticleService {
    calls: Mutex<Vec<Call>>,
    page: Vec<Article>,
    next_cursor: String,
    article: Article,
    assigned_id: Option<i64>,
    failure: Option<DomainError>,
}

impl SpyArticleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Vec<Article>, next_cursor: impl Into<String>) -> Self {
        self.page = page;
        self.next_cursor = next_cursor.into();
        self
    }

    pub fn with_article(mut self, article: Article) -> Self {
        self.article = article;
        self
    }

    pub fn assigning_id(mut self, id: i64) -> Self {
        self.assigned_id = Some(id);
        self
    }

    pub fn failing_with(mut self, err: DomainError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ArticleService for SpyArticleService {
    async fn fetch(&self, cursor: &str, num: i64) -> DomainResult<(Vec<Article>, String)> {
        self.record(Call::Fetch {
            cursor: cursor.to_string(),
            num,
        })?;
        Ok((self.page.clone(), self.next_cursor.clone()))
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<Article> {
        self.record(Call::GetById(id))?;
        Ok(self.article.clone())
    }

    async fn update(&self, article: &mut Article) -> DomainResult<()> {
        self.record(Call::Update(article.clone()))
    }

    async fn get_by_title(&self, title: &str) -> DomainResult<Article> {
        self.record(Call::GetByTitle(title.to_string()))?;
        Ok(self.article.clone())
    }

    async fn store(&self, article: &mut Article) -> DomainResult<()> {
        self.record(Call::Store(article.clone()))?;
        if let Some(id) = self.assigned_id {
            article.id = id;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.record(Call::Delete(id))
    }
}
