//! Resource identifier newtype and validation.

use crate::errors::ModelError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a document-model resource.
///
/// Minted identifiers flow in unchecked via `From`; identifiers supplied
/// from outside the library can be validated with [`ResourceId::parse`] or
/// [`ResourceId::parse_https`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates an identifier without validation; callers are responsible
    /// for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses an identifier, requiring an absolute HTTP or HTTPS URI.
    pub fn parse(value: impl Into<String>) -> Result<Self, ModelError> {
        let s = value.into();
        if !Regex::new(r"^https?://\S+$").expect("invalid regex").is_match(&s) {
            return Err(ModelError::InvalidId { value: s });
        }
        Ok(Self(s))
    }

    /// Parses an identifier, additionally requiring the HTTPS scheme (the
    /// exchange format requires it for resources the publisher controls).
    pub fn parse_https(value: impl Into<String>) -> Result<Self, ModelError> {
        let id = Self::parse(value)?;
        if !id.0.starts_with("https://") {
            return Err(ModelError::HttpsRequired { value: id.0 });
        }
        Ok(id)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
