// src/infrastructure/cursor.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Position in the id-ordered article listing: the last id already served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCursor {
    pub last_id: i64,
}

impl ArticleCursor {
    pub const fn new(last_id: i64) -> Self {
        Self { last_id }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.last_id.to_string().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| DomainError::BadParamInput)?;
        let raw = String::from_utf8(bytes).map_err(|_| DomainError::BadParamInput)?;
        let last_id = raw.parse::<i64>().map_err(|_| DomainError::BadParamInput)?;
        Ok(Self::new(last_id))
    }

    /// Empty token means the first page.
    pub fn decode_optional(token: &str) -> DomainResult<Option<Self>> {
        if token.is_empty() {
            Ok(None)
        } else {
            Self::decode(token).map(Some)
        }
    }
}
