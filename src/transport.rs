use crate::errors::AppError;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

/// Request body. JSON values are serialized before sending, text goes out unchanged.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Text(String),
    Json(Value),
}

/// Per-request options for `HttpTransport::send`.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    /// Skip JSON parsing and hand back the response itself.
    pub raw: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            raw: false,
        }
    }
}

impl RequestOptions {
    pub fn get(headers: HeaderMap) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn with_body(mut self, method: Method, body: RequestBody) -> Self {
        self.method = method;
        self.body = Some(body);
        self
    }
}

/// What `send` returns: parsed JSON, or the untouched response when `raw` was set.
#[derive(Debug)]
pub enum TransportResponse {
    Json(Value),
    Raw(reqwest::Response),
}

/// Minimal base client over `reqwest`. Fails on non-2xx, never retries.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a new `HttpTransport`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for a single request, connection included.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::ExternalApiError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    /// Sends one request.
    ///
    /// # Returns
    ///
    /// * `TransportResponse::Json` with the parsed body, or `TransportResponse::Raw`
    ///   when `options.raw` is set.
    /// * `AppError::HttpError` for any non-2xx status.
    pub async fn send(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, AppError> {
        let raw = options.raw;
        let response = self.execute(url, options).await?;

        if raw {
            return Ok(TransportResponse::Raw(response));
        }

        Ok(TransportResponse::Json(parse_json(url, response).await?))
    }

    /// GET and parse the body as JSON.
    pub async fn get_json(&self, url: &str, headers: HeaderMap) -> Result<Value, AppError> {
        let response = self.execute(url, RequestOptions::get(headers)).await?;
        parse_json(url, response).await
    }

    /// GET in raw mode and read the body as text (HTML pages).
    pub async fn get_text(&self, url: &str, headers: HeaderMap) -> Result<String, AppError> {
        let response = self.execute(url, RequestOptions::get(headers).raw()).await?;
        Ok(response.text().await?)
    }

    /// Sends the request and rejects non-2xx statuses; the body is left unread.
    async fn execute(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, AppError> {
        let RequestOptions {
            method,
            mut headers,
            body,
            ..
        } = options;

        let body = match body {
            Some(RequestBody::Text(text)) => Some(text),
            Some(RequestBody::Json(value)) => {
                headers
                    .entry(CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static("application/json"));
                Some(serde_json::to_string(&value)?)
            }
            None => None,
        };

        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
                body: error_text,
            });
        }

        Ok(response)
    }
}

async fn parse_json(url: &str, response: reqwest::Response) -> Result<Value, AppError> {
    response
        .json()
        .await
        .map_err(|e| AppError::ParseError(format!("Failed to parse JSON from {}: {}", url, e)))
}
