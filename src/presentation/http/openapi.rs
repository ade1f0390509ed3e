// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::fetch_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::store_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::domain::article::Article,
            crate::domain::article::Author
        )
    ),
    tags(
        (name = "Articles", description = "Article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerListCustomizer),
    info(
        title = "Article API",
        description = "Cursor-paginated article routing layer",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerListCustomizer;

impl Modify for ServerListCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        servers.extend(
            server_urls(env::var("PUBLIC_API_URLS").ok().as_deref())
                .into_iter()
                .map(Server::new),
        );
    }
}

/// Server URLs advertised in the document, from a comma-separated
/// `PUBLIC_API_URLS` value. Trailing slashes are dropped and duplicates
/// removed; nothing usable falls back to the default listen address.
pub fn server_urls(raw: Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let urls: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect();

    if urls.is_empty() {
        vec![DEFAULT_SERVER_URL.to_string()]
    } else {
        urls
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (or the default
/// path) and returns where it went.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_article_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/articles"));
        assert!(paths.contains(&"/articles/{id}"));
        assert!(paths.contains(&"/health"));
    }

    #[test]
    fn server_urls_are_trimmed_and_deduplicated() {
        assert_eq!(
            server_urls(Some(" https://api.example/ ,https://api.example, ,http://b.example")),
            ["https://api.example", "http://b.example"]
        );
    }

    #[test]
    fn server_urls_fall_back_to_listen_default() {
        assert_eq!(server_urls(None), [DEFAULT_SERVER_URL]);
        assert_eq!(server_urls(Some(" , ")), [DEFAULT_SERVER_URL]);
    }

    #[test]
    fn document_carries_error_schema() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("Article"));
    }
}
