//! Shared building blocks for the storefront client.
//!
//! Nothing in here knows about HTTP transport or application state. These are
//! the small value types every other crate leans on:
//!
//! - [`ErrorLocation`]: file/line/column captured through `#[track_caller]`
//! - [`HttpStatusCode`]: status code categories used by the response classifier
//! - [`RedactedAccessToken`]: session credential that never leaks into logs

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::credential_error::CredentialError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedAccessToken;

#[cfg(test)]
mod tests;
