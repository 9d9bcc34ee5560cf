//! Single-slot alert state.
//!
//! DESIGN
//! ======
//! Only one alert is visible at a time. Each `show` bumps a sequence number so
//! the auto-dismiss timer of an older alert cannot hide a newer one.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

/// Severity of an alert; maps onto the `alert-<level>` style class.
///
/// Names outside the known set are kept as given so pages can use their own
/// `alert-*` classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AlertLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
    Light,
    Dark,
    Other(String),
}

impl AlertLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Other(name) => name,
        }
    }

    /// Parse a level name. Empty input means `Info`; `error` is an alias for
    /// `Danger`.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "" | "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" | "error" => Self::Danger,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Other(name.to_owned()),
        }
    }
}

/// Contents and visibility of the alert slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    pub level: AlertLevel,
    pub visible: bool,
    pub seq: u64,
}

impl AlertState {
    /// Replace the current alert and make it visible. Returns the sequence
    /// number the dismiss timer must present.
    pub fn show(&mut self, message: &str, level: AlertLevel) -> u64 {
        self.seq += 1;
        self.message = message.to_owned();
        self.level = level;
        self.visible = true;
        self.seq
    }

    /// Hide the alert if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq != seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Class list for the alert element, including `d-none` while hidden.
    pub fn class_name(&self) -> String {
        let base = format!("alert alert-{}", self.level.as_str());
        if self.visible { base } else { format!("{base} d-none") }
    }
}

/// Handle to the page's alert slot.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<AlertState>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self { state: RwSignal::new(AlertState::default()), duration_ms }
    }

    /// Same slot, different auto-dismiss delay.
    pub fn with_duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub fn state(&self) -> RwSignal<AlertState> {
        self.state
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Show `message` and schedule it to be hidden after the configured
    /// duration. Returns the alert's sequence number.
    pub fn show(&self, message: &str, level: AlertLevel) -> u64 {
        let mut seq = 0;
        self.state.update(|s| seq = s.show(message, level));
        self.schedule_dismiss(seq);
        seq
    }

    /// Hide the alert shown with sequence number `seq`, if still current.
    pub fn dismiss(&self, seq: u64) {
        self.state.update(|s| {
            s.dismiss(seq);
        });
    }

    /// Wait out the display duration with `sleep`, then dismiss alert `seq`.
    pub async fn dismiss_after<S, F>(self, seq: u64, sleep: S)
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        sleep(Duration::from_millis(u64::from(self.duration_ms))).await;
        self.dismiss(seq);
    }

    fn schedule_dismiss(&self, seq: u64) {
        #[cfg(feature = "csr")]
        {
            let notifier = *self;
            leptos::task::spawn_local(notifier.dismiss_after(seq, gloo_timers::future::sleep));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = seq;
        }
    }
}

/// Show an alert through `notifier`; no-op when the page has no alert slot.
pub fn show_alert(notifier: Option<Notifier>, message: &str, level: AlertLevel) {
    if let Some(notifier) = notifier {
        notifier.show(message, level);
    }
}
