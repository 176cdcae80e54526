use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::headers::build_headers;
use crate::models::{NormalizedCompany, NormalizedProfile};
use crate::raw_models::{decode_or_default, RawCompanyResponse};
use crate::scrubbing::{normalize_company, normalize_profile};
use crate::transport::HttpTransport;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Url;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use std::time::Duration;

/// Sub-resources fetched for a full profile, merged in this order.
pub const PROFILE_RESOURCES: [&str; 3] = ["profileView", "profileContactInfo", "highlights"];

const ACCEPT_VALUE: &str = "application/vnd.linkedin.normalized+json+2.1";
const PAGE_ACCEPT_VALUE: &str = "text/html";
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
const COMPANY_DECORATION_ID: &str =
    "com.linkedin.voyager.deco.organization.web.WebFullCompanyMain-12";

static PUBLIC_PROFILE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""publicProfileUrl"\s*:\s*"(https?://[^"]+)""#).expect("valid regex")
});

static PROFILE_URN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"urn:li:fs_profile:([A-Za-z0-9_-]+)").expect("valid regex"));

/// Client for the voyager API.
///
/// Holds an `HttpTransport` and the immutable session headers; every
/// operation builds its own request and shares nothing mutable.
#[derive(Clone)]
pub struct VoyagerClient {
    transport: HttpTransport,
    base_url: String,
    csrf_token: String,
    session_cookie: Option<String>,
}

impl VoyagerClient {
    /// Creates a new `VoyagerClient` from configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let transport = HttpTransport::new(Duration::from_secs(config.request_timeout_secs))?;
        Self::with_transport(config, transport)
    }

    /// Creates a client around an existing transport.
    pub fn with_transport(config: &Config, transport: HttpTransport) -> Result<Self, AppError> {
        if config.csrf_token.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "CSRF token cannot be empty".to_string(),
            ));
        }

        let client = Self {
            transport,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            csrf_token: config.csrf_token.clone(),
            session_cookie: config.session_cookie.clone(),
        };

        // Fail at construction if the token or cookie cannot be sent as a header
        client.headers()?;

        Ok(client)
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut extra = vec![
            ("accept", ACCEPT_VALUE),
            ("x-restli-protocol-version", RESTLI_PROTOCOL_VERSION),
        ];
        if let Some(cookie) = self.session_cookie.as_deref() {
            extra.push(("cookie", cookie));
        }
        build_headers(&self.csrf_token, &extra)
    }

    /// Headers for plain HTML page fetches: the session cookie only, no API headers.
    pub fn page_headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PAGE_ACCEPT_VALUE));
        if let Some(cookie) = self.session_cookie.as_deref() {
            let mut value = HeaderValue::from_str(cookie).map_err(|e| {
                AppError::InvalidArgument(format!("Invalid session cookie: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }

    /// `{base}/identity/profiles/{identifier}/{resource}`, with the identifier path-escaped.
    pub fn profile_resource_url(&self, identifier: &str, resource: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::InvalidArgument(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidArgument("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["identity", "profiles", identifier, resource]);
        Ok(url)
    }

    /// Fetches one profile sub-resource.
    ///
    /// Never fails: any error is logged and replaced by an empty map, so one
    /// broken sub-resource does not sink the whole profile.
    pub async fn fetch_profile_resource(&self, identifier: &str, resource: &str) -> Map<String, Value> {
        match self.try_fetch_profile_resource(identifier, resource).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "⚠️  Profile resource '{}' for '{}' failed, using empty data: {}",
                    resource,
                    identifier,
                    e
                );
                Map::new()
            }
        }
    }

    async fn try_fetch_profile_resource(
        &self,
        identifier: &str,
        resource: &str,
    ) -> Result<Map<String, Value>, AppError> {
        let url = self.profile_resource_url(identifier, resource)?;
        tracing::info!("Fetching profile resource '{}' for: {}", resource, identifier);

        match self.transport.get_json(url.as_str(), self.headers()?).await? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::ParseError(format!(
                "Expected a JSON object, got: {}",
                other
            ))),
        }
    }

    /// Fetches the three profile sub-resources concurrently, merges them and
    /// normalizes the result.
    ///
    /// Only an empty identifier fails; network problems degrade to missing fields.
    pub async fn get_full_profile(&self, identifier: &str) -> Result<NormalizedProfile, AppError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AppError::InvalidArgument(
                "Profile identifier is required".to_string(),
            ));
        }

        let [view_resource, contact_resource, highlights_resource] = PROFILE_RESOURCES;
        let (view, contact_info, highlights) = tokio::join!(
            self.fetch_profile_resource(identifier, view_resource),
            self.fetch_profile_resource(identifier, contact_resource),
            self.fetch_profile_resource(identifier, highlights_resource),
        );

        // Later sub-resources win on key collisions
        let mut merged = view;
        merged.extend(contact_info);
        merged.extend(highlights);

        let profile = normalize_profile(&Value::Object(merged));
        tracing::info!(
            "✓ Profile '{}' assembled: {} positions, {} education entries",
            identifier,
            profile.positions.len(),
            profile.education.len()
        );
        Ok(profile)
    }

    /// Looks up a company by universal name.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(company))` on success.
    /// * `Ok(None)` when the lookup failed or matched nothing (logged).
    /// * `Err(AppError::InvalidArgument)` for an empty name.
    pub async fn get_company(
        &self,
        universal_name: &str,
    ) -> Result<Option<NormalizedCompany>, AppError> {
        let universal_name = universal_name.trim();
        if universal_name.is_empty() {
            return Err(AppError::InvalidArgument(
                "Company universal name is required".to_string(),
            ));
        }

        let url = Url::parse_with_params(
            &format!("{}/organization/companies", self.base_url),
            &[
                ("decorationId", COMPANY_DECORATION_ID),
                ("q", "universalName"),
                ("universalName", universal_name),
            ],
        )
        .map_err(|e| AppError::InvalidArgument(format!("Failed to build URL: {}", e)))?;

        tracing::info!("Fetching company: {}", universal_name);

        let data = match self.transport.get_json(url.as_str(), self.headers()?).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("⚠️  Company lookup for '{}' failed: {}", universal_name, e);
                return Ok(None);
            }
        };

        let response: RawCompanyResponse = decode_or_default(&data);
        match response.elements.unwrap_or_default().first() {
            Some(element) => Ok(Some(normalize_company(element))),
            None => {
                tracing::warn!("⚠️  Company lookup for '{}' returned no elements", universal_name);
                Ok(None)
            }
        }
    }

    /// Resolves a profile through HTML pages, then fetches it.
    ///
    /// Reads the `publicProfileUrl` embedded in `page_url`, loads that public
    /// profile page, takes the `fs_profile` id embedded in it and calls
    /// `get_full_profile` with it.
    pub async fn get_profile_from_html(&self, page_url: &str) -> Result<NormalizedProfile, AppError> {
        if page_url.trim().is_empty() {
            return Err(AppError::InvalidArgument("Page URL is required".to_string()));
        }

        let page = self
            .transport
            .get_text(page_url, self.page_headers()?)
            .await
            .with_context(|| format!("Failed to fetch page {}", page_url))?;

        let public_profile_url = extract_public_profile_url(&page).ok_or_else(|| {
            AppError::NotFound(format!("No public profile URL in {}", page_url))
        })?;
        tracing::debug!("Found public profile URL: {}", public_profile_url);

        let profile_page = self
            .transport
            .get_text(&public_profile_url, self.page_headers()?)
            .await
            .with_context(|| format!("Failed to fetch public profile {}", public_profile_url))?;

        let identifier = extract_profile_id(&profile_page).ok_or_else(|| {
            AppError::NotFound(format!("No profile id in {}", public_profile_url))
        })?;
        tracing::info!("Resolved {} to profile id {}", page_url, identifier);

        self.get_full_profile(&identifier).await
    }
}

/// Undoes the HTML-entity and JSON escaping pages wrap embedded data in.
fn unescape_embedded(html: &str) -> String {
    html.replace("&quot;", "\"")
        .replace("&#92;", "\\")
        .replace("\\/", "/")
}

/// First `"publicProfileUrl":"..."` embedded in a page.
pub fn extract_public_profile_url(html: &str) -> Option<String> {
    PUBLIC_PROFILE_URL_RE
        .captures(&unescape_embedded(html))
        .map(|caps| caps[1].to_string())
}

/// First `urn:li:fs_profile:<id>` embedded in a page.
pub fn extract_profile_id(html: &str) -> Option<String> {
    PROFILE_URN_RE
        .captures(html)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_base_url: "https://www.example.com/voyager/api/".to_string(),
            csrf_token: "ajax:42".to_string(),
            session_cookie: Some("JSESSIONID=\"ajax:42\"".to_string()),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_profile_resource_url_escapes_identifier() {
        let client = VoyagerClient::new(&config()).unwrap();
        let url = client
            .profile_resource_url("jane doe/x", "profileView")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.example.com/voyager/api/identity/profiles/jane%20doe%2Fx/profileView"
        );
    }

    #[test]
    fn test_headers_include_token_and_cookie() {
        let client = VoyagerClient::new(&config()).unwrap();
        let headers = client.headers().unwrap();
        assert_eq!(headers.get("csrf-token").unwrap(), "ajax:42");
        assert_eq!(headers.get("cookie").unwrap(), "JSESSIONID=\"ajax:42\"");
        assert_eq!(headers.get("accept").unwrap(), ACCEPT_VALUE);
    }

    #[test]
    fn test_page_headers_carry_cookie_only() {
        let client = VoyagerClient::new(&config()).unwrap();
        let headers = client.page_headers().unwrap();
        assert_eq!(headers.get("accept").unwrap(), "text/html");
        assert_eq!(headers.get("cookie").unwrap(), "JSESSIONID=\"ajax:42\"");
        assert!(headers.get("csrf-token").is_none());
        assert!(headers.get("x-restli-protocol-version").is_none());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut config = config();
        config.csrf_token = "  ".to_string();
        assert!(matches!(
            VoyagerClient::new(&config),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_extract_public_profile_url() {
        let html = r#"<code>{&quot;publicProfileUrl&quot;:&quot;https:\/\/www.example.com\/in\/jane-doe&quot;}</code>"#;
        assert_eq!(
            extract_public_profile_url(html).as_deref(),
            Some("https://www.example.com/in/jane-doe")
        );
        assert_eq!(extract_public_profile_url("<html></html>"), None);
    }

    #[test]
    fn test_extract_profile_id() {
        let html = r#"{"entityUrn":"urn:li:fs_profile:ACoAAB12-x_9","firstName":"Jane"}"#;
        assert_eq!(extract_profile_id(html).as_deref(), Some("ACoAAB12-x_9"));
        assert_eq!(extract_profile_id("urn:li:fs_miniProfile:"), None);
    }
}
