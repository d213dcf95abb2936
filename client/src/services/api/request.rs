//! # Request Descriptors
//!
//! A [`RequestDescriptor`] is everything needed to issue one call: method,
//! path, optional JSON body and extra headers. Descriptors are built per
//! call and never stored.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// The HTTP methods the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub extra_headers: BTreeMap<String, String>,
    /// Clear the session when the server answers 401/403.
    ///
    /// Off for sign-in, where a 401 means "wrong password" rather than
    /// "your credential expired".
    pub reset_session_on_auth_failure: bool,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            extra_headers: BTreeMap::new(),
            reset_session_on_auth_failure: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body. Ignored for GET.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Keep the session on 401/403.
    pub fn preserve_session(mut self) -> Self {
        self.reset_session_on_auth_failure = false;
        self
    }

    /// The body that will actually be sent.
    pub fn outgoing_body(&self) -> Option<&Value> {
        match self.method {
            HttpMethod::Get => None,
            _ => self.body.as_ref(),
        }
    }
}

/// Join the base URL and a request path with exactly one slash.
///
/// A path without a leading `/` gets one; a trailing `/` on the base is
/// dropped.
///
/// ```rust
/// use artmarket_client::services::api::resolve_url;
///
/// assert_eq!(resolve_url("http://localhost:5000", "artworks"), "http://localhost:5000/artworks");
/// assert_eq!(resolve_url("http://localhost:5000/", "/artworks"), "http://localhost:5000/artworks");
/// ```
pub fn resolve_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
