//! Page-lifetime wiring for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `init` runs once when the WASM module starts. It installs logging, the
//! stylesheet, the global listeners, and the modal controller, and mounts the
//! alert region when the page has an `#alert` slot. The handles it creates
//! live in thread-locals because the browser main thread is the only thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::alert_region::AlertRegion;
use crate::config::ClientConfig;
use crate::modal::ModalController;
use crate::modal::dom::WebModalDom;
use crate::net::api::BrowserApiClient;
use crate::state::credentials::LocalStorageCredentials;
use crate::state::notification::Notifier;

/// Id of the page element that hosts alerts.
pub const ALERT_SLOT_ID: &str = "alert";

thread_local! {
    static CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
    static MODALS: RefCell<Option<Rc<ModalController<WebModalDom>>>> = const { RefCell::new(None) };
    static NOTIFIER: Cell<Option<Notifier>> = const { Cell::new(None) };
}

pub fn config() -> ClientConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn set_config(config: ClientConfig) {
    let duration_ms = config.alert_duration_ms;
    CONFIG.with(|c| *c.borrow_mut() = config);
    NOTIFIER.with(|n| n.set(n.get().map(|notifier| notifier.with_duration(duration_ms))));
}

pub fn api_client() -> BrowserApiClient {
    BrowserApiClient::browser(config())
}

pub fn credentials() -> LocalStorageCredentials {
    LocalStorageCredentials::new(config().storage_key)
}

pub fn modals() -> Option<Rc<ModalController<WebModalDom>>> {
    MODALS.with(|m| m.borrow().clone())
}

pub fn notifier() -> Option<Notifier> {
    NOTIFIER.with(Cell::get)
}

pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    crate::util::styles::inject_styles();
    crate::util::error_observers::install();

    let controller = Rc::new(ModalController::for_page());
    crate::modal::events::install(Rc::clone(&controller));
    MODALS.with(|m| *m.borrow_mut() = Some(controller));

    mount_alert_region();
}

/// Mount the reactive alert region into `#alert`; pages without the slot get
/// no notifier and `showAlert` becomes a no-op.
fn mount_alert_region() {
    let Some(slot) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ALERT_SLOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        leptos::logging::log!("no #{ALERT_SLOT_ID} slot on this page");
        return;
    };

    // The region carries the alert classes itself.
    slot.set_class_name("");
    let notifier = Notifier::new(config().alert_duration_ms);
    leptos::mount::mount_to(slot, move || view! { <AlertRegion notifier/> }).forget();
    NOTIFIER.with(|n| n.set(Some(notifier)));
}
