//! HTTP status code categories used when classifying API outcomes.

/// HTTP status code for outcome categorization.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx responses take the success path.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Anything at or above 500 is a server fault, including non-standard codes.
    pub fn is_server_fault(&self) -> bool {
        self.0 >= 500
    }

    /// 401 and 403 both end the current session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.0, 401 | 403)
    }

    /// Failures at or below 300 are never stored as application errors.
    pub fn is_within_redirect_boundary(&self) -> bool {
        self.0 <= 300
    }

    /// Canonical reason phrase for well-known codes.
    pub fn reason_phrase(&self) -> Option<&'static str> {
        let phrase = match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            300 => "Multiple Choices",
            301 => "Moved Permanently",
            302 => "Found",
            304 => "Not Modified",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            410 => "Gone",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => return None,
        };
        Some(phrase)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
