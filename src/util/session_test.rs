use super::*;
use crate::testing::{MemoryCredentials, RecordingBrowser};

#[test]
fn check_auth_passes_with_credential() {
    let browser = RecordingBrowser::at("/cards.html");
    assert!(check_auth(&MemoryCredentials::with_token("t"), &browser, &ClientConfig::default()));
    assert!(browser.redirects().is_empty());
}

#[test]
fn check_auth_redirects_anonymous_user_off_protected_page() {
    let browser = RecordingBrowser::at("/admin.html");
    assert!(!check_auth(&MemoryCredentials::default(), &browser, &ClientConfig::default()));
    assert_eq!(browser.redirects(), vec!["index.html".to_owned()]);
}

#[test]
fn check_auth_allows_anonymous_user_on_login_page() {
    for path in ["/index.html", "/"] {
        let browser = RecordingBrowser::at(path);
        assert!(check_auth(&MemoryCredentials::default(), &browser, &ClientConfig::default()));
        assert!(browser.redirects().is_empty());
    }
}

#[test]
fn logout_clears_state_after_confirmation() {
    let credentials = MemoryCredentials::with_token("t");
    credentials.put_extra("lastCard", "42");
    let browser = RecordingBrowser::at("/cards.html").answering(true);

    assert!(logout(&credentials, &browser, &ClientConfig::default()));
    assert!(credentials.is_empty());
    assert_eq!(browser.prompts(), vec![LOGOUT_PROMPT.to_owned()]);
    assert_eq!(browser.redirects(), vec!["index.html".to_owned()]);
}

#[test]
fn declined_logout_changes_nothing() {
    let credentials = MemoryCredentials::with_token("t");
    let browser = RecordingBrowser::at("/cards.html").answering(false);

    assert!(!logout(&credentials, &browser, &ClientConfig::default()));
    assert_eq!(credentials.token().as_deref(), Some("t"));
    assert!(browser.redirects().is_empty());
}
