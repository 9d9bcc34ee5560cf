//! # bankcards-web
//!
//! Browser-side utility layer for the bank-cards web pages, built with
//! Leptos + WASM. Provides the authenticated request client, the alert
//! slot, the session guard and logout, overlay (modal) handling with a
//! toolkit/manual backend, global error logging, and the shared stylesheet.
//!
//! Browser glue is compiled only with the `csr` feature. Everything else
//! builds natively, which is how the unit tests run.

pub mod components;
pub mod config;
pub mod modal;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod js_api;
#[cfg(feature = "csr")]
pub mod runtime;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: wires the layer into the page once the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    runtime::init();
}
