use crate::errors::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Name of the anti-CSRF header the voyager API checks.
pub const CSRF_HEADER: &str = "csrf-token";

/// Builds request headers: the CSRF token, then any extra pairs.
///
/// Extra pairs replace earlier values with the same name, including the
/// token itself. Names and values that are not valid HTTP tokens are rejected.
pub fn build_headers(csrf_token: &str, extra: &[(&str, &str)]) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, header_value(CSRF_HEADER, csrf_token)?);

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidArgument(format!("Invalid header name '{}': {}", name, e)))?;
        headers.insert(header_name, header_value(name, value)?);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(value).map_err(|e| {
        AppError::InvalidArgument(format!("Invalid value for header '{}': {}", name, e))
    })?;
    if name.eq_ignore_ascii_case(CSRF_HEADER) || name.eq_ignore_ascii_case("cookie") {
        value.set_sensitive(true);
    }
    Ok(value)
}
