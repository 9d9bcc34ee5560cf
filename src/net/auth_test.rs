use super::*;
use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::testing::{MemoryCredentials, RecordingBrowser, ScriptedTransport};
use futures::executor::block_on;

#[test]
fn login_stores_returned_token() {
    let credentials = MemoryCredentials::default();
    let browser = RecordingBrowser::at("/index.html");
    let transport = ScriptedTransport::default().respond_json(200, r#"{"token":"jwt-9","username":"ann","role":"ADMIN"}"#);
    let client = ApiClient::new(ClientConfig::default(), credentials.clone(), browser, transport.clone());

    let response = block_on(login(&client, "ann", "secret")).expect("login succeeds");

    assert_eq!(response.role, Role::Admin);
    assert_eq!(credentials.token().as_deref(), Some("jwt-9"));
    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].url, "/api/auth/login");
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"username":"ann","password":"secret"}"#));
}

#[test]
fn login_sends_username_as_typed() {
    let credentials = MemoryCredentials::default();
    let browser = RecordingBrowser::at("/index.html");
    let transport = ScriptedTransport::default().respond_json(200, r#"{"token":"jwt-9","username":" ann ","role":"USER"}"#);
    let client = ApiClient::new(ClientConfig::default(), credentials, browser, transport.clone());

    block_on(login(&client, " ann ", "secret")).expect("login succeeds");

    assert_eq!(transport.sent()[0].body.as_deref(), Some(r#"{"username":" ann ","password":"secret"}"#));
}

#[test]
fn failed_login_leaves_store_untouched() {
    let credentials = MemoryCredentials::default();
    let browser = RecordingBrowser::at("/index.html");
    let transport = ScriptedTransport::default().respond_json(401, r#"{"message":"Invalid username or password"}"#);
    let client = ApiClient::new(ClientConfig::default(), credentials.clone(), browser.clone(), transport);

    let err = block_on(login(&client, "ann", "wrong")).expect_err("login rejected");

    assert_eq!(err.to_string(), "Invalid username or password");
    assert_eq!(credentials.token(), None);
    assert!(browser.redirects().is_empty());
}

#[test]
fn login_rejects_blank_token() {
    let credentials = MemoryCredentials::default();
    let transport = ScriptedTransport::default().respond_json(200, r#"{"token":" ","username":"ann","role":"USER"}"#);
    let client = ApiClient::new(ClientConfig::default(), credentials.clone(), RecordingBrowser::at("/"), transport);

    assert!(matches!(block_on(login(&client, "ann", "pw")), Err(ApiError::Decode(_))));
    assert_eq!(credentials.token(), None);
}

#[test]
fn register_returns_plain_text_confirmation() {
    let transport =
        ScriptedTransport::default().respond(200, Some("text/plain;charset=UTF-8"), "User registered successfully");
    let client =
        ApiClient::new(ClientConfig::default(), MemoryCredentials::default(), RecordingBrowser::at("/"), transport);
    let request = RegisterRequest {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "pw123456".to_owned(),
    };

    assert_eq!(block_on(register(&client, &request)).as_deref(), Ok("User registered successfully"));
}

#[test]
fn register_surfaces_duplicate_user_text() {
    let transport = ScriptedTransport::default().respond(400, Some("text/plain"), "Username already exists");
    let client =
        ApiClient::new(ClientConfig::default(), MemoryCredentials::default(), RecordingBrowser::at("/"), transport);
    let request = RegisterRequest {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "pw".to_owned(),
    };

    assert_eq!(block_on(register(&client, &request)), Err(ApiError::Server("Username already exists".to_owned())));
}
