use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// A required argument was missing or malformed. Raised before any request is sent.
    InvalidArgument(String),
    /// The upstream API answered with a non-2xx status.
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
        /// Response body, as text.
        body: String,
    },
    /// The request could not be sent or the connection failed.
    ExternalApiError(String),
    /// The response body could not be decoded.
    ParseError(String),
    /// Expected content was not found in a fetched document.
    NotFound(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl AppError {
    /// Returns the HTTP status when this error (or its source) came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpError { status, .. } => Some(*status),
            AppError::WithContext { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AppError::HttpError { status, url, body } => {
                write!(f, "HTTP {} from {}: {}", status, url, body)
            }
            AppError::ExternalApiError(msg) => write!(f, "External API error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::WithContext { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::ParseError(err.to_string())
        } else {
            AppError::ExternalApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_and_keeps_status() {
        let err: Result<(), AppError> = Err(AppError::HttpError {
            status: 403,
            url: "https://example.com/x".to_string(),
            body: "forbidden".to_string(),
        });
        let wrapped = err.context("fetching page").unwrap_err();

        assert_eq!(wrapped.status(), Some(403));
        assert_eq!(
            wrapped.to_string(),
            "fetching page: HTTP 403 from https://example.com/x: forbidden"
        );
    }

    #[test]
    fn test_with_context_is_lazy_on_success() {
        let ok: Result<u8, AppError> = Ok(1);
        let value = ok
            .with_context(|| panic!("context must not be built on success"))
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_invalid_argument_has_no_status() {
        let err = AppError::InvalidArgument("identifier is required".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Invalid argument: identifier is required");
    }
}
