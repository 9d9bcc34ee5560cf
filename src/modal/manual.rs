//! Manual overlay handling for pages without the UI toolkit.
//!
//! An open overlay has `display: block` plus the `show` class, `<body>`
//! carries `modal-open`, and a backdrop element `<id>-backdrop` sits at the
//! end of `<body>`. Backdrops are only ever addressed by that keyed id, and
//! the body marker stays while any manually shown overlay remains open.

#[cfg(test)]
#[path = "manual_test.rs"]
mod manual_test;

use std::rc::Rc;

use super::{ModalBackend, ModalError};

/// DOM operations the manual backend needs.
pub trait ModalDom {
    fn has_overlay(&self, id: &str) -> bool;

    fn overlay_shown(&self, id: &str) -> bool;

    /// Toggle the display style and `show` class together.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when the element cannot be updated.
    fn set_overlay_shown(&self, id: &str, shown: bool) -> Result<(), ModalError>;

    /// Toggle `modal-open` on `<body>`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when the body element is unavailable.
    fn set_body_modal_open(&self, open: bool) -> Result<(), ModalError>;

    /// Append a backdrop element with the given id to `<body>`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when the element cannot be created.
    fn append_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError>;

    /// Remove the backdrop with the given id, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ModalError`] when removal fails.
    fn remove_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError>;

    /// Ids of overlays currently shown, in document order.
    fn visible_overlays(&self) -> Vec<String>;
}

pub fn backdrop_id(modal_id: &str) -> String {
    format!("{modal_id}-backdrop")
}

pub struct ManualModals<D> {
    dom: Rc<D>,
}

impl<D> Clone for ManualModals<D> {
    fn clone(&self) -> Self {
        Self { dom: Rc::clone(&self.dom) }
    }
}

impl<D: ModalDom> ManualModals<D> {
    pub fn new(dom: Rc<D>) -> Self {
        Self { dom }
    }

    fn any_other_open(&self, id: &str) -> bool {
        self.dom.visible_overlays().iter().any(|open| open != id)
    }

    /// Best-effort close that ignores individual failures.
    pub fn force_close(&self, id: &str) {
        let _ = self.dom.set_overlay_shown(id, false);
        if !self.any_other_open(id) {
            let _ = self.dom.set_body_modal_open(false);
        }
        let _ = self.dom.remove_backdrop(&backdrop_id(id));
    }
}

impl<D: ModalDom> ModalBackend for ManualModals<D> {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn show(&self, id: &str) -> Result<(), ModalError> {
        if !self.dom.has_overlay(id) {
            return Err(ModalError::NotFound(id.to_owned()));
        }
        if self.dom.overlay_shown(id) {
            return Ok(());
        }
        self.dom.set_overlay_shown(id, true)?;
        self.dom.set_body_modal_open(true)?;
        self.dom.append_backdrop(&backdrop_id(id))
    }

    fn hide(&self, id: &str) -> Result<(), ModalError> {
        if !self.dom.has_overlay(id) {
            return Err(ModalError::NotFound(id.to_owned()));
        }
        self.dom.set_overlay_shown(id, false)?;
        if !self.any_other_open(id) {
            self.dom.set_body_modal_open(false)?;
        }
        self.dom.remove_backdrop(&backdrop_id(id))
    }

    fn is_visible(&self, id: &str) -> bool {
        self.dom.overlay_shown(id)
    }
}
