/*
[INPUT]:  HTTP configuration (base URL, timeouts) and API credentials
[OUTPUT]: Configured client issuing public and signed requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::signature::{NonceGenerator, RequestSigner};
use crate::http::{QuadrigaError, Result};
use crate::types::{ApiErrorEnvelope, SignedBody};

/// Versioned QuadrigaCX API root
pub const DEFAULT_BASE_URL: &str = "https://api.quadrigacx.com/v2/";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the QuadrigaCX API
///
/// Cloning is cheap; clones share the connection pool and the nonce counter.
#[derive(Debug, Clone)]
pub struct QuadrigaClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
    nonces: Arc<NonceGenerator>,
}

impl QuadrigaClient {
    /// Create a new client against the default API root
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(client_id, api_key, api_secret),
            ClientConfig::default(),
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| QuadrigaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            signer: RequestSigner::new(credentials),
            nonces: Arc::new(NonceGenerator::new()),
        })
    }

    /// API root every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        self.signer.credentials()
    }

    /// Build full URL for an endpoint relative to the API root
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build an unauthenticated GET request with URL-encoded query pairs
    pub(crate) fn public_request(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let mut url = self.endpoint_url(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(self.http_client.get(url))
    }

    /// Build a signed POST request; `params` is merged with the auth fields
    pub(crate) fn signed_request<P: Serialize>(
        &self,
        endpoint: &str,
        params: P,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let auth = self.signer.sign(self.nonces.next())?;
        let body = serde_json::to_vec(&SignedBody { auth, params })?;

        Ok(self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body))
    }

    /// Send a request and return the raw body
    ///
    /// Non-2xx statuses and exchange error envelopes become `QuadrigaError::Api`.
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(
            %method,
            path = %path,
            status = status.as_u16(),
            body_len = body.len(),
            "quadrigacx response received"
        );

        let envelope = ApiErrorEnvelope::parse(&body);

        if !status.is_success() {
            warn!(%method, path = %path, status = status.as_u16(), "quadrigacx request failed");
            let message = envelope.map_or(body, |envelope| envelope.error.message);
            return Err(QuadrigaError::api_error(status, message));
        }

        if let Some(envelope) = envelope {
            warn!(
                %method,
                path = %path,
                code = envelope.error.code,
                "quadrigacx returned error envelope"
            );
            return Err(QuadrigaError::Api {
                code: envelope.error.code,
                message: envelope.error.message,
            });
        }

        Ok(body)
    }

    /// Send a request and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let body = self.send_text(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}
