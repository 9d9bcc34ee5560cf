//! Window-level logging of uncaught errors and unhandled promise rejections.
//!
//! Observers only log; they never report or recover.

#[cfg(test)]
#[path = "error_observers_test.rs"]
mod error_observers_test;

/// Console line for an uncaught script error.
#[cfg(any(test, feature = "csr"))]
fn uncaught_error_line(message: &str, source: &str, line: u32) -> String {
    if source.is_empty() {
        format!("uncaught error: {message}")
    } else {
        format!("uncaught error: {message} ({source}:{line})")
    }
}

/// Console line for a rejected promise nobody handled.
#[cfg(any(test, feature = "csr"))]
fn unhandled_rejection_line(reason: &str) -> String {
    format!("unhandled promise rejection: {reason}")
}

/// Register `error` and `unhandledrejection` listeners on `window`.
///
/// Closures are leaked; the listeners live as long as the page.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_error = Closure::wrap(Box::new(move |ev: web_sys::ErrorEvent| {
            leptos::logging::error!("{}", uncaught_error_line(&ev.message(), &ev.filename(), ev.lineno()));
        }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
        let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let on_rejection = Closure::wrap(Box::new(move |ev: web_sys::PromiseRejectionEvent| {
            let reason = ev.reason();
            let text = reason
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
                .or_else(|| reason.as_string())
                .unwrap_or_else(|| format!("{reason:?}"));
            leptos::logging::error!("{}", unhandled_rejection_line(&text));
        }) as Box<dyn FnMut(web_sys::PromiseRejectionEvent)>);
        let _ = window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
        on_rejection.forget();
    }
}
