//! Window-level browser capabilities used by the session helpers.
//!
//! Client-side (csr): backed by `window.location` and `window.confirm`.
//! Native builds: `WindowBrowser` reports the root path, declines every
//! confirmation, and ignores navigation.

/// Navigation and user-prompt access.
pub trait Browser {
    /// Full-page navigation to `href`.
    fn redirect(&self, href: &str);

    /// The current `location.pathname`.
    fn current_path(&self) -> String;

    /// Ask the user a yes/no question.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn redirect(&self, href: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = href;
        }
    }

    fn current_path(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            "/".to_owned()
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }
}
