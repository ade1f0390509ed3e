//! Axum routing layer exposing cursor-paginated CRUD over an injected
//! [`ArticleService`](application::ports::articles::ArticleService).
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
