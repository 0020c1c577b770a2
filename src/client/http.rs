//! Client entry point and request plumbing.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::SecretString;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    ResultsService, RulesService, RunsService, SchemaService, TemplatesService, TestsService,
};
use crate::auth::{authorization_value, AccessTokenCallback, Credentials};
use crate::models::PreferReturn;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::endpoints::Endpoints;
use super::transport::{Method, ReqwestTransport, Transport, TransportRequest};

/// Header asking the service to embed creator/modifier links.
pub const USER_METADATA_HEADER: &str = "Include-User-Metadata";

/// The main client for the Property Validation API.
///
/// The client hands out one service per resource. Services share the
/// client's transport and configuration and are cheap to create.
///
/// # Example
///
/// ```no_run
/// use property_validation::{AccessTokenCallback, ClientConfig, PropertyValidationClient};
/// use property_validation::models::CollectionParams;
/// use futures_util::StreamExt;
///
/// # async fn example() -> property_validation::Result<()> {
/// let client = PropertyValidationClient::new(ClientConfig::default())?
///     .with_access_token_callback(AccessTokenCallback::new(|| async {
///         Ok("Bearer eyJhbGciOi...".to_string())
///     }));
///
/// let mut rules = client.rules().list_minimal(CollectionParams::new("my-project"))?;
/// while let Some(rule) = rules.next().await {
///     println!("{}", rule?.display_name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PropertyValidationClient {
    pub(crate) inner: Arc<ClientInner>,
}

#[derive(Clone)]
pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) config: ClientConfig,
    pub(crate) endpoints: Endpoints,
    pub(crate) access_token_callback: Option<AccessTokenCallback>,
}

impl PropertyValidationClient {
    /// Create a client that talks HTTPS through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(Arc::new(transport), config)
    }

    /// Create a client on top of a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                endpoints: Endpoints::new(config.base_url.clone()),
                config,
                access_token_callback: None,
            }),
        })
    }

    /// Register the callback used when a service has no explicit token.
    pub fn with_access_token_callback(self, callback: AccessTokenCallback) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                access_token_callback: Some(callback),
                ..(*self.inner).clone()
            }),
        }
    }

    /// Get the rules service.
    pub fn rules(&self) -> RulesService {
        RulesService::new(self.inner.clone())
    }

    /// Get the rule templates service.
    pub fn templates(&self) -> TemplatesService {
        TemplatesService::new(self.inner.clone())
    }

    /// Get the tests service.
    pub fn tests(&self) -> TestsService {
        TestsService::new(self.inner.clone())
    }

    /// Get the runs service.
    pub fn runs(&self) -> RunsService {
        RunsService::new(self.inner.clone())
    }

    /// Get the results service.
    pub fn results(&self) -> ResultsService {
        ResultsService::new(self.inner.clone())
    }

    /// Get the schema and properties service.
    pub fn schema(&self) -> SchemaService {
        SchemaService::new(self.inner.clone())
    }

    /// The endpoint resolver of this client.
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// The configuration of this client.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Per-request header hints.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RequestOptions {
    pub(crate) prefer: Option<PreferReturn>,
    pub(crate) user_metadata: bool,
}

impl RequestOptions {
    pub(crate) fn user_metadata(mut self, enabled: bool) -> Self {
        self.user_metadata = enabled;
        self
    }
}

impl ClientInner {
    /// Credentials backed by the client-wide callback.
    pub(crate) fn credentials(&self) -> Credentials {
        Credentials::from_callback(self.access_token_callback.clone())
    }

    /// Build request headers with authentication.
    pub(crate) fn build_headers(
        &self,
        token: &SecretString,
        options: RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(AUTHORIZATION, authorization_value(token)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&self.config.accept_header())
                .map_err(|_| Error::Config("Invalid API version".to_string()))?,
        );

        if let Some(prefer) = options.prefer {
            headers.insert(
                HeaderName::from_static("prefer"),
                HeaderValue::from_static(prefer.header_value()),
            );
        }

        if options.user_metadata {
            headers.insert(
                HeaderName::from_static("include-user-metadata"),
                HeaderValue::from_static("true"),
            );
        }

        Ok(headers)
    }

    /// Resolve the credential and send one request.
    pub(crate) async fn send(
        &self,
        credentials: &Credentials,
        method: Method,
        url: String,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value> {
        let token = credentials.resolve().await?;
        let headers = self.build_headers(&token, options)?;

        self.transport
            .send(TransportRequest {
                method,
                url,
                headers,
                body,
            })
            .await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        url: String,
        options: RequestOptions,
    ) -> Result<T> {
        let body = self.send(credentials, Method::Get, url, None, options).await?;
        decode(body)
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        credentials: &Credentials,
        url: String,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .send(credentials, Method::Post, url, Some(body), RequestOptions::default())
            .await?;
        decode(response)
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        credentials: &Credentials,
        url: String,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .send(credentials, Method::Put, url, Some(body), RequestOptions::default())
            .await?;
        decode(response)
    }

    /// Make a DELETE request; any response body is discarded.
    pub(crate) async fn delete(&self, credentials: &Credentials, url: String) -> Result<()> {
        self.send(credentials, Method::Delete, url, None, RequestOptions::default())
            .await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| Error::Protocol(format!("unexpected response body: {}", e)))
}

impl std::fmt::Debug for PropertyValidationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyValidationClient")
            .field("config", &self.inner.config)
            .field(
                "access_token_callback",
                &self.inner.access_token_callback.is_some(),
            )
            .finish()
    }
}
