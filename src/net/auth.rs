//! Credential exchange: login and registration.
//!
//! These are the only calls that write the stored credential. Everything
//! else reads it through the request client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::api::{ApiClient, RequestOptions};
use super::error::ApiError;
use super::transport::{HttpMethod, Transport};
use super::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::state::credentials::CredentialStore;
use crate::util::browser::Browser;

/// Exchange username and password for a bearer credential and store it.
///
/// # Errors
///
/// Returns the request client's error unchanged; a rejected login surfaces as
/// [`ApiError::Server`] with the server's message.
pub async fn login<C, B, T>(client: &ApiClient<C, B, T>, username: &str, password: &str) -> Result<LoginResponse, ApiError>
where
    C: CredentialStore,
    B: Browser,
    T: Transport,
{
    let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let options = RequestOptions::json(HttpMethod::Post, &payload)?;
    let response: LoginResponse = client.request_json(&client.config().login_endpoint, options).await?;
    if response.token.trim().is_empty() {
        return Err(ApiError::Decode("login response carried an empty token".to_owned()));
    }
    client.credentials().store(&response.token);
    leptos::logging::log!("signed in as {} ({:?})", response.username, response.role);
    Ok(response)
}

/// Create an account. Returns the server's confirmation text.
///
/// # Errors
///
/// Returns the request client's error unchanged; duplicate usernames or
/// emails surface as [`ApiError::Server`].
pub async fn register<C, B, T>(client: &ApiClient<C, B, T>, request: &RegisterRequest) -> Result<String, ApiError>
where
    C: CredentialStore,
    B: Browser,
    T: Transport,
{
    let options = RequestOptions::json(HttpMethod::Post, request)?;
    let value = client.request(&client.config().register_endpoint, options).await?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
