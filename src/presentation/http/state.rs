// src/presentation/http/state.rs
use crate::application::ports::ArticleServicePort;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<ArticleServicePort>,
    pub store_validation: bool,
}

impl HttpState {
    pub fn new(articles: Arc<ArticleServicePort>) -> Self {
        Self {
            articles,
            store_validation: false,
        }
    }

    #[must_use]
    pub fn with_store_validation(mut self, enabled: bool) -> Self {
        self.store_validation = enabled;
        self
    }
}
