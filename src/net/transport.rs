//! HTTP transport seam between the API client and `fetch`.
//!
//! Client-side (csr): `GlooTransport` issues real requests via `gloo-net`.
//! Native builds (unit tests) only see the trait and plain request/response
//! values, so the client's normalization rules run without a browser.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::TransportError;

/// HTTP verbs the API client issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a method name in any casing, as `fetch` does.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).ok_or_else(|| serde::de::Error::custom(format!("unsupported HTTP method `{name}`")))
    }
}

/// Fully prepared outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response with its body already read as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Mirrors `Response.ok`: any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prepared request and reads the whole response body.
///
/// Implementations run on the browser's single-threaded event loop, so the
/// returned future is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and wait for the full response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the server could not be
    /// reached and [`TransportError::Other`] for any other failure.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed transport used in the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder.body(body).map_err(map_gloo_error)?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(map_gloo_error)?;

        let headers = resp.headers();
        let status = resp.status();
        let content_type = headers.get("content-type");
        let content_length = headers.get("content-length");
        let body = resp.text().await.map_err(map_gloo_error)?;
        Ok(HttpResponse { status, content_type, content_length, body })
    }
}

/// `fetch` rejects with a `TypeError` when the request never reaches a server.
#[cfg(feature = "csr")]
fn map_gloo_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "TypeError" => TransportError::Network(js.message),
        other => TransportError::Other(other.to_string()),
    }
}
