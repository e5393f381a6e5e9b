use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Misuse of a session credential.
#[derive(Debug, ThisError)]
pub enum CredentialError {
    /// Credentials are only ever written through an explicit `as_str()` call.
    #[error("Credential Error: {type_name} refuses to serialize, use as_str() {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
