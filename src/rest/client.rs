//! Bitstamp REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, IncreasingNonce, NonceProvider};
use crate::error::{BitstampError, TransientFailure};
use crate::rest::endpoints::BITSTAMP_BASE_URL;
use crate::rest::request::{
    Method, PreparedRequest, Request, build_get_url, build_headers, build_post_body, endpoint_url,
};

/// Delay applied inside a call before it reports a transient failure.
pub const DEFAULT_TRANSIENT_BACKOFF: Duration = Duration::from_secs(2);

/// Default transport timeout for a single call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The Bitstamp REST API client.
///
/// Every call performs exactly one HTTP attempt. When the attempt gets no
/// response, or a response that is not JSON, the client logs a warning,
/// waits for the transient backoff and returns
/// [`BitstampError::Transient`]. Whether to try again is up to the caller
/// (see [`retry_transient`](crate::rest::retry_transient)).
///
/// # Example
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BitstampRestClient::new()?;
///
///     let ticker = client.get_ticker().await?;
///     println!("Ticker: {:?}", ticker);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
/// use bitstamp_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret", "123456")?);
///     let client = BitstampRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let info = client.get_info().await?;
///     println!("Account: {:?}", info);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitstampRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    transient_backoff: Duration,
}

impl BitstampRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitstampRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Result<Self, BitstampError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitstampRestClientBuilder {
        BitstampRestClientBuilder::new()
    }

    /// The normalized base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref().map(|c| c.get_credentials())
    }

    /// Turn a logical request into its wire form.
    ///
    /// For POST this draws a fresh nonce and signs it, so every call yields a
    /// distinct body.
    pub fn prepare(&self, request: &Request) -> Result<PreparedRequest, BitstampError> {
        let headers = build_headers(&request.headers)?;

        match request.method {
            Method::Get => Ok(PreparedRequest {
                method: Method::Get,
                url: build_get_url(&self.base_url, &request.path, &request.params)?,
                body: None,
                headers,
            }),
            Method::Post => {
                let credentials = self
                    .credentials
                    .as_ref()
                    .ok_or(BitstampError::MissingCredentials)?
                    .get_credentials();

                let nonce = self.nonce_provider.next_nonce().to_string();
                let body = build_post_body(&request.params, &nonce, credentials)?;

                Ok(PreparedRequest {
                    method: Method::Post,
                    url: endpoint_url(&self.base_url, &request.path),
                    body: Some(body),
                    headers,
                })
            }
        }
    }

    /// Dispatch a request and return the decoded JSON body unchanged.
    ///
    /// The body is returned whatever the HTTP status, so exchange errors
    /// reach the caller as data.
    pub async fn execute(&self, request: Request) -> Result<Value, BitstampError> {
        let prepared = self.prepare(&request)?;
        tracing::debug!(method = %prepared.method, path = %request.path, "Dispatching request");

        let builder = match prepared.method {
            Method::Get => self.http_client.get(&prepared.url),
            Method::Post => self
                .http_client
                .post(&prepared.url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(prepared.body.unwrap_or_default()),
        };

        let response = match builder.headers(prepared.headers).send().await {
            Ok(response) => response,
            Err(e) => {
                return Err(self
                    .transient(&request.path, TransientFailure::transport(e.to_string()))
                    .await);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Err(self
                    .transient(&request.path, TransientFailure::transport(e.to_string()))
                    .await);
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Null) => Err(self
                .transient(
                    &request.path,
                    TransientFailure::decode(format!("HTTP {}: null body", status)),
                )
                .await),
            Ok(value) => Ok(value),
            Err(e) => Err(self
                .transient(
                    &request.path,
                    TransientFailure::decode(format!("HTTP {}: {}. Body: {}", status, e, body)),
                )
                .await),
        }
    }

    /// Dispatch by path, parameter set and verb name.
    ///
    /// `method` is matched case-insensitively against `GET` and `POST`; any
    /// other verb fails with [`BitstampError::UnsupportedMethod`] before any
    /// I/O.
    pub async fn query<P>(&self, path: &str, params: &P, method: &str) -> Result<Value, BitstampError>
    where
        P: Serialize + ?Sized,
    {
        let method: Method = method.parse()?;
        let request = Request::new(path, method).params(params)?;
        self.execute(request).await
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<P>(&self, path: &str, params: &P) -> Result<Value, BitstampError>
    where
        P: Serialize + ?Sized,
    {
        self.execute(Request::get(path).params(params)?).await
    }

    /// Make an authenticated POST request.
    pub(crate) async fn private_post<P>(&self, path: &str, params: &P) -> Result<Value, BitstampError>
    where
        P: Serialize + ?Sized,
    {
        self.execute(Request::post(path).params(params)?).await
    }

    /// Log, back off, and build the retry-advised error.
    async fn transient(&self, path: &str, failure: TransientFailure) -> BitstampError {
        tracing::warn!(
            path,
            kind = %failure.kind,
            backoff_ms = self.transient_backoff.as_millis() as u64,
            "Bitstamp error, trying again: {}",
            failure.message
        );
        tokio::time::sleep(self.transient_backoff).await;
        BitstampError::Transient(failure)
    }
}

impl std::fmt::Debug for BitstampRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitstampRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("transient_backoff", &self.transient_backoff)
            .finish()
    }
}

/// Builder for [`BitstampRestClient`].
pub struct BitstampRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
    transient_backoff: Duration,
}

impl BitstampRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITSTAMP_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            transient_backoff: DEFAULT_TRANSIENT_BACKOFF,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the transport timeout for each call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the delay applied before a transient failure is reported.
    pub fn transient_backoff(mut self, backoff: Duration) -> Self {
        self.transient_backoff = backoff;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BitstampRestClient, BitstampError> {
        let parsed = Url::parse(&self.base_url)?;
        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(BitstampError::Config(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }
        let mut base_url = parsed.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitstamp-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitstamp-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Certificate and host verification stay at reqwest's secure defaults.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| BitstampError::Config(format!("Failed to build HTTP client: {e}")))?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        Ok(BitstampRestClient {
            http_client: client,
            base_url,
            credentials: self.credentials,
            nonce_provider,
            transient_backoff: self.transient_backoff,
        })
    }
}

impl Default for BitstampRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
