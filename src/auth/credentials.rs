//! Credential management for Bitstamp API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::BitstampError;

/// Default environment variable holding the API key.
pub const ENV_API_KEY: &str = "BITSTAMP_API_KEY";
/// Default environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "BITSTAMP_API_SECRET";
/// Default environment variable holding the customer id.
pub const ENV_CLIENT_ID: &str = "BITSTAMP_CLIENT_ID";

/// API credentials: key, secret and the numeric customer id.
///
/// All three are required and must be non-empty. The value is immutable once
/// built.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
    client_id: String,
}

impl Credentials {
    /// Create new credentials, rejecting any empty component.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self, BitstampError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        let client_id = client_id.into();

        if api_key.is_empty() || api_secret.is_empty() || client_id.is_empty() {
            return Err(BitstampError::Config(
                "Missing API key, secret, or client id".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
            client_id,
        })
    }

    /// The API key (public identifier).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The customer id the key belongs to.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self, BitstampError> {
        Ok(Self {
            credentials: Credentials::new(api_key, api_secret, client_id)?,
        })
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `BITSTAMP_API_KEY`, `BITSTAMP_API_SECRET` and
/// `BITSTAMP_CLIENT_ID`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, BitstampError> {
        Self::from_env_vars(ENV_API_KEY, ENV_API_SECRET, ENV_CLIENT_ID)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// An unset variable is treated like an empty one.
    pub fn from_env_vars(
        key_var: &str,
        secret_var: &str,
        client_id_var: &str,
    ) -> Result<Self, BitstampError> {
        let read = |name: &str| std::env::var(name).unwrap_or_default();

        Ok(Self {
            credentials: Credentials::new(read(key_var), read(secret_var), read(client_id_var))?,
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any variable is unset or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
