//! Session credential handling with redacted Debug output.

use crate::{CredentialError, ErrorLocation};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// An access token that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedAccessToken {
    inner: String,
}

impl RedactedAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Get the actual token value for the `Authorization` header.
    ///
    /// # Security Note
    /// Only call this when actually sending the token to the API.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Bearer header value, built on demand.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.inner)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl fmt::Debug for RedactedAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedAccessToken([REDACTED])")
    }
}

impl fmt::Display for RedactedAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ACCESS TOKEN]")
    }
}

impl Drop for RedactedAccessToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedAccessToken {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(CredentialError::SerializationRefused {
            type_name: "RedactedAccessToken",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
