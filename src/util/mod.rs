//! Browser helpers shared by page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate window/document concerns (navigation, prompts,
//! global listeners, injected styles) from the request client and modal
//! logic so both stay testable natively.

pub mod browser;
pub mod error_observers;
pub mod session;
pub mod styles;
