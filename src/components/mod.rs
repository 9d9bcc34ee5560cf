//! Leptos components mounted into fixed page slots.

pub mod alert_region;
