//! The transport seam between the client and the network.
//!
//! Services never talk to `reqwest` directly: they build a
//! [`TransportRequest`] and hand it to a [`Transport`]. The default
//! [`ReqwestTransport`] performs the HTTPS round trip and maps status codes to
//! [`Error`] variants; tests and embedders can supply their own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::error::api_message;
use crate::{Error, Result};

use super::config::ClientConfig;

/// HTTP method of a [`TransportRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request: absolute URL, headers, optional JSON body.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Request headers (authorization, accept, prefer, ...)
    pub headers: HeaderMap,
    /// JSON body for `POST`/`PUT`
    pub body: Option<Value>,
}

/// Issues authenticated requests and returns the parsed JSON body.
///
/// Implementations must not retry: every call to [`Transport::send`] is
/// exactly one round trip. A non-success status is reported as an error,
/// and a success with an empty body yields [`Value::Null`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request.
    async fn send(&self, request: TransportRequest) -> Result<Value>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport honoring the timeout and user agent of `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(|e| {
                Error::Protocol(format!("response body is not valid JSON: {}", e))
            });
        }

        let status_code = status.as_u16();
        let body: Value = response.json().await.unwrap_or_default();

        match status_code {
            401 => Err(Error::Unauthorized(
                api_message(&body)
                    .unwrap_or("Access token is invalid or expired")
                    .to_string(),
            )),
            404 => Err(Error::NotFound(
                api_message(&body)
                    .unwrap_or("Resource not found")
                    .to_string(),
            )),
            _ => Err(Error::from_api_response(status_code, body)),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Put => self.http.put(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };

        let mut headers = request.headers;
        let builder = match request.body {
            Some(body) => {
                headers
                    .entry(CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static("application/json"));
                builder.headers(headers).json(&body)
            }
            None => builder.headers(headers),
        };

        let response = builder.send().await?;
        tracing::debug!(status = response.status().as_u16(), "received response");

        Self::handle_response(response).await
    }
}
