// src/presentation/http/headers.rs
use axum::http::{
    HeaderName, HeaderValue,
    header::{InvalidHeaderValue, ToStrError},
};
use headers::{Error, Header};

pub static X_CURSOR: HeaderName = HeaderName::from_static("x-cursor");

/// `X-Cursor`: the token a client sends back as `cursor` to get the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XCursor(HeaderValue);

impl XCursor {
    /// Fails only for tokens that cannot travel in a header (control bytes).
    pub fn new(cursor: &str) -> Result<Self, InvalidHeaderValue> {
        HeaderValue::from_str(cursor).map(Self)
    }

    pub fn as_str(&self) -> Result<&str, ToStrError> {
        self.0.to_str()
    }
}

impl Header for XCursor {
    fn name() -> &'static HeaderName {
        &X_CURSOR
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        values.next().cloned().map(Self).ok_or_else(Error::invalid)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(std::iter::once(self.0.clone()));
    }
}
