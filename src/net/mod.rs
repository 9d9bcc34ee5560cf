//! Networking modules for the authenticated REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request/response normalization, `transport` is the `fetch`
//! seam, `auth` performs the credential exchange, `error` and `types` define
//! the failure and wire shapes.

pub mod api;
pub mod auth;
pub mod error;
pub mod transport;
pub mod types;
