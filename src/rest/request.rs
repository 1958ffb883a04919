//! Request values and the GET/POST construction protocol.
//!
//! Everything here is pure apart from the nonce read in
//! [`BitstampRestClient::prepare`](crate::rest::BitstampRestClient::prepare), so URL
//! and body layout can be tested without a network.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::auth::{Credentials, sign_request};
use crate::error::BitstampError;

/// Form fields the dispatcher owns on signed requests.
pub const AUTH_FIELDS: [&str; 3] = ["nonce", "key", "signature"];

/// HTTP verbs the exchange accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Public request, parameters in the query string.
    Get,
    /// Signed request, parameters in a form body.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = BitstampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(BitstampError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A logical API call, before authentication is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Endpoint path relative to the base URL, without slashes (e.g. `ticker`).
    pub path: String,
    /// HTTP verb.
    pub method: Method,
    /// Parameters in caller order.
    pub params: Vec<(String, String)>,
    /// Extra headers in caller order.
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// Create an empty request.
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Create an empty GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, Method::Get)
    }

    /// Create an empty POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, Method::Post)
    }

    /// Append one parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Append every field of a serializable parameter set, in field order.
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, BitstampError> {
        let encoded = serde_urlencoded::to_string(params)
            .map_err(|e| BitstampError::Config(format!("Failed to encode parameters: {e}")))?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
            .map_err(|e| BitstampError::Config(format!("Failed to encode parameters: {e}")))?;
        self.params.extend(pairs);
        Ok(self)
    }

    /// Append one extra header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A request ready to hand to the HTTP transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP verb.
    pub method: Method,
    /// Absolute URL, including the query string for GET.
    pub url: String,
    /// Form body for POST.
    pub body: Option<String>,
    /// Validated extra headers.
    pub headers: HeaderMap,
}

/// `<base_url><path>/`. `base_url` must end with a slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}/", base_url, path.trim_matches('/'))
}

/// Build the URL of a public GET request.
///
/// Empty params produce no trailing `?`.
pub fn build_get_url(
    base_url: &str,
    path: &str,
    params: &[(String, String)],
) -> Result<String, BitstampError> {
    let url = endpoint_url(base_url, path);
    if params.is_empty() {
        return Ok(url);
    }

    let query_string = serde_urlencoded::to_string(params)
        .map_err(|e| BitstampError::Config(format!("Failed to encode query: {e}")))?;
    Ok(format!("{}?{}", url, query_string))
}

/// Build the form body of a signed POST request.
///
/// Caller fields named like an authentication field are dropped; `nonce`,
/// `key` and `signature` are then appended after the remaining caller fields
/// so the transmitted values are always the signed ones.
pub fn build_post_body(
    params: &[(String, String)],
    nonce: &str,
    credentials: &Credentials,
) -> Result<String, BitstampError> {
    let signature = sign_request(credentials, nonce);

    let mut fields: Vec<(&str, &str)> = params
        .iter()
        .filter(|(name, _)| !AUTH_FIELDS.contains(&name.as_str()))
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    fields.push(("nonce", nonce));
    fields.push(("key", credentials.api_key()));
    fields.push(("signature", &signature));

    serde_urlencoded::to_string(&fields)
        .map_err(|e| BitstampError::Config(format!("Failed to encode body: {e}")))
}

/// Validate extra headers into a header map.
pub fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, BitstampError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| BitstampError::Config(format!("Invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| BitstampError::Config(format!("Invalid header value for {name}: {e}")))?;
        map.append(name, value);
    }
    Ok(map)
}
