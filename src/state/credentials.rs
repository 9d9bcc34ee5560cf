//! Bearer credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential is the only application state this layer owns. It is read
//! on every request, written after login, and wiped on logout or when the
//! server rejects it.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Storage for the single bearer credential.
pub trait CredentialStore {
    /// Current credential, if any. Blank values count as absent.
    fn token(&self) -> Option<String>;

    /// Persist a freshly issued credential.
    fn store(&self, token: &str);

    /// Drop the credential together with any other locally persisted state.
    fn clear_all(&self);
}

/// Treat empty or whitespace-only stored values as a missing credential.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

/// Credential kept in `window.localStorage` under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl CredentialStore for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            normalize_token(storage.get_item(&self.key).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(&self.key, token);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear_all(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.clear();
            }
        }
    }
}
