//! Authenticated REST client for the bank-cards API.
//!
//! Every request goes through [`ApiClient::request`], which attaches the
//! stored bearer credential, normalizes the response body into a
//! `serde_json::Value`, and turns session rejection into a redirect to the
//! login page.
//!
//! ERROR HANDLING
//! ==============
//! Request failures are never silent: callers always get an [`ApiError`]
//! whose text is suitable for an alert. Redirect side effects happen before
//! the error is returned so callers can simply stop.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;
use crate::state::credentials::CredentialStore;
use crate::util::browser::Browser;

/// Per-request options. Mirrors the subset of `fetch` init the pages use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    #[serde(deserialize_with = "header_values_as_strings")]
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn method(method: HttpMethod) -> Self {
        Self { method, ..Self::default() }
    }

    /// Options carrying `payload` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `payload` cannot be serialized.
    pub fn json<T: Serialize>(method: HttpMethod, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self { method, headers: BTreeMap::new(), body: Some(body) })
    }
}

/// Accept any JSON scalar as a header value, the way `fetch` stringifies them.
/// `null` values are dropped.
fn header_values_as_strings<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((name, text)),
            other => Some((name, other.to_string())),
        })
        .collect())
}

/// Request client with its collaborators passed in explicitly.
#[derive(Clone, Debug)]
pub struct ApiClient<C, B, T> {
    config: ClientConfig,
    credentials: C,
    browser: B,
    transport: T,
}

/// The client wired to `localStorage`, `window`, and `fetch`.
#[cfg(feature = "csr")]
pub type BrowserApiClient = ApiClient<
    crate::state::credentials::LocalStorageCredentials,
    crate::util::browser::WindowBrowser,
    super::transport::GlooTransport,
>;

#[cfg(feature = "csr")]
impl BrowserApiClient {
    pub fn browser(config: ClientConfig) -> Self {
        let credentials = crate::state::credentials::LocalStorageCredentials::new(config.storage_key.clone());
        Self::new(
            config,
            credentials,
            crate::util::browser::WindowBrowser,
            super::transport::GlooTransport,
        )
    }
}

impl<C, B, T> ApiClient<C, B, T>
where
    C: CredentialStore,
    B: Browser,
    T: Transport,
{
    pub fn new(config: ClientConfig, credentials: C, browser: B, transport: T) -> Self {
        Self { config, credentials, browser, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Perform a request against `path` and return the normalized body.
    ///
    /// Returns `Value::Null` for empty successful responses, `Value::String`
    /// for non-JSON bodies, and the parsed document otherwise.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. [`ApiError::Unauthenticated`] and
    /// [`ApiError::SessionExpired`] are returned after the browser has been
    /// sent to the login page.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let token = self.credentials.token();
        if token.is_none() && !self.config.is_auth_path(path) {
            self.browser.redirect(&self.config.login_page);
            return Err(ApiError::Unauthenticated);
        }

        let request = build_request(&self.config, path, options, token.as_deref());
        let response = self.transport.send(request).await.map_err(|err| {
            leptos::logging::warn!("request to {path} failed: {err}");
            ApiError::from(err)
        })?;

        if is_session_rejection(response.status) && !self.config.is_credential_exchange(path) {
            self.credentials.clear_all();
            self.browser.redirect(&self.config.login_page);
            return Err(ApiError::SessionExpired);
        }

        interpret_response(response)
    }

    /// [`Self::request`] followed by deserialization into `R`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::request`] returns, plus [`ApiError::Decode`] when
    /// the body does not match `R`.
    pub async fn request_json<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R, ApiError> {
        let value = self.request(path, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::default()).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn post_json<P: Serialize>(&self, path: &str, payload: &P) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::json(HttpMethod::Post, payload)?).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn put_json<P: Serialize>(&self, path: &str, payload: &P) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::json(HttpMethod::Put, payload)?).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOptions::method(HttpMethod::Delete)).await
    }
}

fn is_session_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

/// Merge default headers, caller headers, and the bearer credential.
///
/// The JSON content type is only a default; a caller-supplied
/// `Content-Type` (any casing) replaces it.
pub(crate) fn build_request(config: &ClientConfig, path: &str, options: RequestOptions, token: Option<&str>) -> HttpRequest {
    let mut headers = BTreeMap::new();
    if !options.headers.keys().any(|key| key.eq_ignore_ascii_case("content-type")) {
        headers.insert("Content-Type".to_owned(), "application/json".to_owned());
    }
    if let Some(token) = token {
        headers.insert("Authorization".to_owned(), format!("Bearer {token}"));
    }
    headers.extend(options.headers);

    HttpRequest {
        method: options.method,
        url: config.request_url(path),
        headers,
        body: options.body,
    }
}

fn is_empty_response(response: &HttpResponse) -> bool {
    response.status == 204 || response.content_length.as_deref().map(str::trim) == Some("0")
}

fn is_json_content(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

/// Turn a received response into the caller-facing value or error.
pub(crate) fn interpret_response(response: HttpResponse) -> Result<Value, ApiError> {
    if is_empty_response(&response) {
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        return Ok(Value::Null);
    }

    let ok = response.is_success();
    let data = if is_json_content(response.content_type.as_deref()) {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?
    } else {
        Value::String(response.body)
    };

    if !ok {
        return Err(error_from_body(response.status, &data));
    }
    Ok(data)
}

/// Pick the most specific message a failed response offers.
pub(crate) fn error_from_body(status: u16, data: &Value) -> ApiError {
    let message = match data {
        Value::String(text) => Some(text.as_str()),
        Value::Object(fields) => ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str)),
        _ => None,
    };
    match message.map(str::trim) {
        Some(text) if !text.is_empty() => ApiError::Server(text.to_owned()),
        _ => ApiError::Status(status),
    }
}
