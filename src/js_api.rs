//! Functions exported to page scripts.
//!
//! Plain HTML pages drive the layer through these `wasm-bindgen` exports.
//! Requests resolve to the normalized JSON value (or `null`) and reject with
//! a JS `Error` carrying the [`ApiError`] message.

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::ClientConfig;
use crate::net::api::RequestOptions;
use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::runtime;
use crate::state::notification::{AlertLevel, show_alert};
use crate::util::browser::WindowBrowser;
use crate::util::session;

fn to_js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn api_error(err: &ApiError) -> JsValue {
    to_js_error(&err.to_string())
}

fn to_js_value(value: &Value) -> Result<JsValue, JsValue> {
    if value.is_null() {
        return Ok(JsValue::NULL);
    }
    js_sys::JSON::parse(&value.to_string())
}

/// Serialize a JS object and read it back as `T`; `undefined`/`null` give `T::default()`.
fn from_js_object<T: serde::de::DeserializeOwned + Default>(value: &JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    let raw: String = js_sys::JSON::stringify(value)?.into();
    serde_json::from_str(&raw).map_err(|e| to_js_error(&e.to_string()))
}

/// Override the client configuration (`{ loginPage, storageKey, ... }`).
///
/// # Errors
///
/// Rejects objects that do not match the configuration shape.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: ClientConfig = from_js_object(&config)?;
    runtime::set_config(config);
    Ok(())
}

/// Authenticated request; resolves to parsed JSON, text, or `null`.
#[wasm_bindgen(js_name = apiRequest)]
pub fn api_request(url: String, options: JsValue) -> js_sys::Promise {
    let options: Result<RequestOptions, JsValue> = from_js_object(&options);
    future_to_promise(async move {
        let options = options?;
        let value = runtime::api_client().request(&url, options).await.map_err(|e| api_error(&e))?;
        to_js_value(&value)
    })
}

/// Sign in and store the returned credential; resolves to `{ token, username, role }`.
#[wasm_bindgen]
pub fn login(username: String, password: String) -> js_sys::Promise {
    future_to_promise(async move {
        let client = runtime::api_client();
        let response = crate::net::auth::login(&client, &username, &password)
            .await
            .map_err(|e| api_error(&e))?;
        let value = serde_json::to_value(&response).map_err(|e| to_js_error(&e.to_string()))?;
        to_js_value(&value)
    })
}

/// Create an account; resolves to the server's confirmation text.
#[wasm_bindgen]
pub fn register(username: String, email: String, password: String) -> js_sys::Promise {
    future_to_promise(async move {
        let client = runtime::api_client();
        let request = RegisterRequest { username, email, password };
        let text = crate::net::auth::register(&client, &request)
            .await
            .map_err(|e| api_error(&e))?;
        Ok(JsValue::from_str(&text))
    })
}

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert_js(message: String, level: Option<String>) {
    let level = level.as_deref().map(AlertLevel::parse).unwrap_or_default();
    show_alert(runtime::notifier(), &message, level);
}

#[wasm_bindgen(js_name = checkAuth)]
pub fn check_auth() -> bool {
    session::check_auth(&runtime::credentials(), &WindowBrowser, &runtime::config())
}

#[wasm_bindgen]
pub fn logout() -> bool {
    session::logout(&runtime::credentials(), &WindowBrowser, &runtime::config())
}

#[wasm_bindgen(js_name = showModal)]
pub fn show_modal(modal_id: String) {
    if let Some(modals) = runtime::modals() {
        modals.show_modal(&modal_id);
    }
}

#[wasm_bindgen(js_name = hideModal)]
pub fn hide_modal(modal_id: String) {
    if let Some(modals) = runtime::modals() {
        modals.hide_modal(&modal_id);
    }
}
