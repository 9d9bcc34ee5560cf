//! Overlay (modal) show/hide with a capability-selected backend.
//!
//! ARCHITECTURE
//! ============
//! `ModalBackend` is the capability: `toolkit` delegates to `bootstrap.Modal`,
//! `manual` toggles classes and a keyed backdrop itself. The backend is picked
//! once when the controller is built. `ModalController` adds the page-level
//! policy on top: missing overlays are ignored, failures are logged, and a
//! failed hide falls back to forced manual cleanup.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here propagates to page logic. A broken overlay degrades to a
//! logged error and a best-effort close.


#[cfg(feature = "csr")]
pub mod dom;
pub mod events;
pub mod manual;
#[cfg(feature = "csr")]
pub mod toolkit;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use self::events::{ClickTarget, dismiss_targets};
use self::manual::{ManualModals, ModalDom};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("overlay #{0} not found")]
    NotFound(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("toolkit call failed: {0}")]
    Toolkit(String),
}

/// Minimal overlay capability shared by the toolkit and manual backends.
pub trait ModalBackend {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Show the overlay `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when the overlay cannot be shown.
    fn show(&self, id: &str) -> Result<(), ModalError>;

    /// Hide the overlay `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when the overlay cannot be hidden.
    fn hide(&self, id: &str) -> Result<(), ModalError>;

    fn is_visible(&self, id: &str) -> bool;
}

pub struct ModalController<D> {
    dom: Rc<D>,
    backend: Box<dyn ModalBackend>,
    fallback: ManualModals<D>,
    /// Overlays opened through this controller, oldest first.
    opened: RefCell<Vec<String>>,
}

impl<D: ModalDom + 'static> ModalController<D> {
    /// Use `toolkit` when present, otherwise manage overlays manually.
    pub fn new(dom: Rc<D>, toolkit: Option<Box<dyn ModalBackend>>) -> Self {
        let fallback = ManualModals::new(Rc::clone(&dom));
        let backend = toolkit.unwrap_or_else(|| Box::new(fallback.clone()) as Box<dyn ModalBackend>);
        leptos::logging::log!("modal backend: {}", backend.name());
        Self { dom, backend, fallback, opened: RefCell::new(Vec::new()) }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn show_modal(&self, id: &str) {
        if !self.dom.has_overlay(id) {
            return;
        }
        match self.backend.show(id) {
            Ok(()) => {
                let mut opened = self.opened.borrow_mut();
                opened.retain(|open| open != id);
                opened.push(id.to_owned());
            }
            Err(err) => leptos::logging::error!("Error showing modal {id}: {err}"),
        }
    }

    pub fn hide_modal(&self, id: &str) {
        if !self.dom.has_overlay(id) {
            return;
        }
        if let Err(err) = self.backend.hide(id) {
            leptos::logging::error!("Error hiding modal {id}: {err}");
            self.fallback.force_close(id);
        }
        self.opened.borrow_mut().retain(|open| open != id);
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.backend.is_visible(id)
    }

    /// Close whatever overlay the clicked element dismisses.
    pub fn handle_click(&self, target: &ClickTarget) {
        for id in dismiss_targets(target) {
            self.hide_modal(&id);
        }
    }

    /// Close the topmost visible overlay. Returns its id.
    pub fn handle_escape(&self) -> Option<String> {
        let tracked = self
            .opened
            .borrow()
            .iter()
            .rev()
            .find(|id| self.backend.is_visible(id))
            .cloned();
        let id = tracked.or_else(|| self.dom.visible_overlays().pop())?;
        self.hide_modal(&id);
        Some(id)
    }
}

#[cfg(feature = "csr")]
impl ModalController<dom::WebModalDom> {
    /// Controller for the live document, preferring `bootstrap.Modal` when loaded.
    pub fn for_page() -> Self {
        let toolkit = toolkit::ToolkitModals::detect().map(|t| Box::new(t) as Box<dyn ModalBackend>);
        Self::new(Rc::new(dom::WebModalDom), toolkit)
    }
}
