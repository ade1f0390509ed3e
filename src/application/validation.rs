// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;

/// Required-field check run before `store` when body binding is enabled.
pub fn validate_new_article(article: &Article) -> ApplicationResult<()> {
    let missing: Vec<&str> = [
        ("title", article.title.as_str()),
        ("content", article.content.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
