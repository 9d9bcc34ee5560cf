//! Session guard and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `check_auth` on load and `logout` from their sign-out control.
//! Both navigate with a full page load so no page state survives the switch.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ClientConfig;
use crate::state::credentials::CredentialStore;
use crate::util::browser::Browser;

pub const LOGOUT_PROMPT: &str = "Are you sure you want to sign out?";

/// Redirect to the login page when no credential is stored.
///
/// Returns `false` if a redirect was issued.
pub fn check_auth(credentials: &impl CredentialStore, browser: &impl Browser, config: &ClientConfig) -> bool {
    if credentials.token().is_some() {
        return true;
    }
    if config.is_login_page(&browser.current_path()) {
        return true;
    }
    browser.redirect(&config.login_page);
    false
}

/// Ask for confirmation, then clear local state and go to the login page.
///
/// Returns whether the user confirmed.
pub fn logout(credentials: &impl CredentialStore, browser: &impl Browser, config: &ClientConfig) -> bool {
    if !browser.confirm(LOGOUT_PROMPT) {
        return false;
    }
    credentials.clear_all();
    browser.redirect(&config.login_page);
    true
}
