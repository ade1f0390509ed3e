// src/presentation/http/controllers/articles.rs
use crate::application::{error::ApplicationError, validation::validate_new_article};
use crate::domain::article::Article;
use crate::domain::errors::DomainError;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::headers::XCursor;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{
        FromRequest, Path, Query, Request,
        rejection::{PathRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
};
use headers::HeaderMapExt;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchParams {
    /// Opaque token from a previous `X-Cursor` header. Empty or absent starts at the beginning.
    pub cursor: Option<String>,
    /// Page size. Unparsable or zero values fall back to 10.
    #[param(value_type = Option<i64>)]
    pub num: Option<String>,
}

impl FetchParams {
    /// Reads each key on its own; the first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "cursor" => &mut params.cursor,
                "num" => &mut params.num,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Effective page size for a raw `num` query value.
///
/// Negative numbers are forwarded untouched; the service decides what they mean.
pub fn page_size(raw: Option<&str>) -> i64 {
    match raw.and_then(|value| value.parse::<i64>().ok()) {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(num) => num,
    }
}

fn parse_id(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>().map_err(|_| HttpError::invalid_id(raw))
}

fn path_id(path: Result<Path<String>, PathRejection>) -> HttpResult<i64> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => Err(HttpError::invalid_id(&rejection.body_text())),
    }
}

/// Buffers the body (within the default body limit) and binds it.
async fn read_article(request: Request) -> HttpResult<Article> {
    let body = Bytes::from_request(request, &()).await.map_err(|rejection| {
        HttpError::from_error(ApplicationError::unprocessable(rejection.body_text()))
    })?;
    bind_article(&body)
}

fn bind_article(body: &[u8]) -> HttpResult<Article> {
    let article: Article = serde_json::from_slice(body)
        .map_err(|err| HttpError::from_error(ApplicationError::unprocessable(err.to_string())))?;
    validate_new_article(&article).map_err(HttpError::from_error)?;
    Ok(article)
}

#[utoipa::path(
    get,
    path = "/articles",
    params(FetchParams),
    responses(
        (status = 200, description = "Page of articles in service order.", body = Vec<Article>,
            headers(("X-Cursor" = String, description = "Cursor for the next page"))),
        (status = 500, description = "Service failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn fetch_articles(
    Extension(state): Extension<HttpState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HttpResult<(HeaderMap, Json<Vec<Article>>)> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "unreadable query string, using defaults");
        Vec::new()
    });
    let params = FetchParams::from_pairs(pairs);

    let num = page_size(params.num.as_deref());
    let cursor = params.cursor.unwrap_or_default();

    let (articles, next_cursor) = state.articles.fetch(&cursor, num).await.into_http()?;

    let header = XCursor::new(&next_cursor).map_err(|_| {
        HttpError::from_error(
            DomainError::other("service returned a cursor that cannot be sent as a header").into(),
        )
    })?;
    let mut headers = HeaderMap::new();
    headers.typed_insert(header);

    Ok((headers, Json(articles)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = Article),
        (status = 404, description = "Unknown or non-numeric id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<String>, PathRejection>,
) -> HttpResult<Json<Article>> {
    let id = path_id(path)?;

    state.articles.get_by_id(id).await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body(content = Article, description = "Read only when store validation is enabled."),
    responses(
        (status = 200, description = "The stored article as returned by the service.", body = Article),
        (status = 400, description = "Required fields missing.", body = ErrorResponse),
        (status = 409, description = "Article already exists.", body = ErrorResponse),
        (status = 422, description = "Body is not an article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn store_article(
    Extension(state): Extension<HttpState>,
    request: Request,
) -> HttpResult<Json<Article>> {
    // The body is never touched unless binding is enabled.
    let mut article = if state.store_validation {
        read_article(request).await?
    } else {
        Article::default()
    };

    state.articles.store(&mut article).await.into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 404, description = "Unknown or non-numeric id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<String>, PathRejection>,
) -> HttpResult<StatusCode> {
    let id = path_id(path)?;

    state.articles.delete(id).await.into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
