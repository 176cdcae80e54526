use serde::Deserialize;

/// Default base path of the voyager API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.linkedin.com/voyager/api";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub csrf_token: String,
    pub session_cookie: Option<String>, // Raw `Cookie` header value, optional
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_base_url: validate_base_url(
                &std::env::var("VOYAGER_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                "VOYAGER_API_BASE_URL",
            )?,
            csrf_token: std::env::var("LINKEDIN_CSRF_TOKEN")
                .map_err(|_| anyhow::anyhow!("LINKEDIN_CSRF_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("LINKEDIN_CSRF_TOKEN cannot be empty");
                    }
                    Ok(token.trim().to_string())
                })?,
            session_cookie: std::env::var("LINKEDIN_COOKIE")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a positive number of seconds")
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Voyager API base URL: {}", config.api_base_url);
        tracing::debug!(
            "Session cookie configured: {}",
            config.session_cookie.is_some()
        );
        tracing::debug!("Request timeout: {}s", config.request_timeout_secs);

        Ok(config)
    }
}

/// Checks the scheme and strips trailing slashes so paths can be appended.
fn validate_base_url(url: &str, var: &str) -> anyhow::Result<String> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("{} cannot be empty", var);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", var);
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation_strips_trailing_slash() {
        let url = validate_base_url(" https://example.com/voyager/api/ ", "X").unwrap();
        assert_eq!(url, "https://example.com/voyager/api");
    }

    #[test]
    fn test_url_validation_rejects_other_schemes() {
        let err = validate_base_url("ftp://example.com", "VOYAGER_API_BASE_URL").unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_url_validation_rejects_empty() {
        assert!(validate_base_url("   ", "X").is_err());
    }
}
