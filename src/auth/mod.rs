//! Authentication module for Bitstamp API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    Credentials, CredentialsProvider, ENV_API_KEY, ENV_API_SECRET, ENV_CLIENT_ID, EnvCredentials,
    StaticCredentials,
};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::{sign, sign_request};
