// API client module: a small blocking HTTP client that talks to the
// doggo.ninja API. Every request carries the bearer token; responses are
// handed back raw (status + body) for the service layer to decode.

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Body, Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Blocking API client holding the reqwest client, the base URL of the
/// API and the bearer token attached to every call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: String,
}

/// Raw response: the status is reported, never interpreted.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        // No request timeout: uploads of large files may take a while
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Resolve an endpoint relative to the base URL, e.g. `files`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint `{}`", path))
    }

    /// Resolve an endpoint with one extra, escaped, path segment, e.g.
    /// `file/<shortName>`.
    pub fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL `{}` cannot take path segments", self.base_url))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let val = format!("Bearer {}", self.token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&val).context("Token is not a valid header value")?,
        );
        Ok(headers)
    }

    pub fn get(&self, url: Url) -> Result<ApiResponse> {
        let req = self.client.get(url.clone());
        self.send("GET", &url, req)
    }

    /// POST a raw body with `Content-Type: application/octet-stream`.
    pub fn post_octet_stream(&self, url: Url, body: impl Into<Body>) -> Result<ApiResponse> {
        let req = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body);
        self.send("POST", &url, req)
    }

    pub fn delete(&self, url: Url) -> Result<ApiResponse> {
        let req = self.client.delete(url.clone());
        self.send("DELETE", &url, req)
    }

    fn send(&self, method: &str, url: &Url, req: RequestBuilder) -> Result<ApiResponse> {
        tracing::debug!(%url, "{} request", method);
        let res = req
            .headers(self.auth_headers()?)
            .send()
            .with_context(|| format!("Failed to send {} request to {}", method, url))?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "{} returned a non-success status", method);
        }
        let body = res
            .bytes()
            .with_context(|| format!("Failed to read response body from {}", url))?
            .to_vec();
        Ok(ApiResponse { status, body })
    }
}
