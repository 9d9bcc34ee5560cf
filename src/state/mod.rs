//! Client-side state owned by this layer.
//!
//! DESIGN
//! ======
//! The stored credential and the alert slot are the only shared state; each
//! lives in its own module so helpers can depend on exactly one of them.

pub mod credentials;
pub mod notification;
